//! Reference-table tests for categories, capabilities and strategies.

use periph::peripheral::{PeripheralCategory, PeripheralType};

use PeripheralType::*;

/// (type, category, transmitter id, web oop, non-fixed slope, nfc scan)
const REFERENCE: [(PeripheralType, PeripheralCategory, bool, bool, bool, bool); 17] = [
    (M5Stack, PeripheralCategory::M5Stack, false, false, false, false),
    (M5StickC, PeripheralCategory::M5Stack, false, false, false, false),
    (Libre2, PeripheralCategory::Cgm, false, true, true, true),
    (MiaoMiao, PeripheralCategory::Cgm, false, true, true, false),
    (Bubble, PeripheralCategory::Cgm, false, true, true, false),
    (Dexcom, PeripheralCategory::Cgm, true, false, false, false),
    (DexcomG7, PeripheralCategory::Cgm, false, false, false, false),
    (DexcomG4, PeripheralCategory::Cgm, true, false, false, false),
    (Blucon, PeripheralCategory::Cgm, true, false, true, false),
    (BlueReader, PeripheralCategory::Cgm, false, false, true, false),
    (Droplet, PeripheralCategory::Cgm, false, false, true, false),
    (GnSentry, PeripheralCategory::Cgm, false, false, true, false),
    (Watlaa, PeripheralCategory::Cgm, false, false, true, false),
    (Atom, PeripheralCategory::Cgm, false, true, true, false),
    (Libre3HeartBeat, PeripheralCategory::HeartBeat, true, false, false, false),
    (DexcomG7HeartBeat, PeripheralCategory::HeartBeat, true, false, false, false),
    (OmniPodHeartBeat, PeripheralCategory::HeartBeat, false, false, false, false),
];

#[test]
fn test_reference_table_covers_every_type() {
    assert_eq!(REFERENCE.len(), PeripheralType::ALL.len());
    for t in PeripheralType::ALL {
        assert!(REFERENCE.iter().any(|row| row.0 == t), "{t:?} missing from reference");
    }
}

#[test]
fn test_categories_match_reference() {
    for (t, category, ..) in REFERENCE {
        assert_eq!(t.category(), category, "{t:?}");
    }
}

#[test]
fn test_heartbeat_types_never_cgm() {
    for t in [Libre3HeartBeat, DexcomG7HeartBeat, OmniPodHeartBeat] {
        assert_eq!(t.category(), PeripheralCategory::HeartBeat);
    }
}

#[test]
fn test_capabilities_match_reference() {
    for (t, _, tx, oop, slope, nfc) in REFERENCE {
        assert_eq!(t.needs_transmitter_id(), tx, "needs_transmitter_id {t:?}");
        assert_eq!(t.supports_out_of_process_computation(), oop, "web oop {t:?}");
        assert_eq!(t.supports_non_fixed_slope(), slope, "non-fixed slope {t:?}");
        assert_eq!(t.requires_proximity_scan_before_connect(), nfc, "nfc scan {t:?}");
    }
}

#[test]
fn test_transmitter_id_subset_is_exact() {
    let needing: Vec<_> = PeripheralType::ALL
        .into_iter()
        .filter(|t| t.needs_transmitter_id())
        .collect();
    assert_eq!(needing, vec![Dexcom, DexcomG4, Blucon, Libre3HeartBeat, DexcomG7HeartBeat]);
}

#[test]
fn test_only_libre2_needs_nfc_scan() {
    let needing: Vec<_> = PeripheralType::ALL
        .into_iter()
        .filter(|t| t.requires_proximity_scan_before_connect())
        .collect();
    assert_eq!(needing, vec![Libre2]);
}

#[test]
fn test_web_oop_and_slope_lists_diverge() {
    // Every web OOP type also allows a non-fixed slope, but not the reverse.
    for t in PeripheralType::ALL {
        if t.supports_out_of_process_computation() {
            assert!(t.supports_non_fixed_slope(), "{t:?}");
        }
    }
    assert!(Blucon.supports_non_fixed_slope());
    assert!(!Blucon.supports_out_of_process_computation());
}

#[test]
fn test_only_bluereader_lacks_configuration_strategy() {
    for t in PeripheralType::ALL {
        match t.configuration_strategy() {
            None => assert_eq!(t, BlueReader),
            Some(strategy) => assert_eq!(strategy.peripheral_type(), t),
        }
    }
}

#[test]
fn test_dispatch_is_pure() {
    for t in PeripheralType::ALL {
        assert_eq!(t.category(), t.category());
        assert_eq!(t.capabilities(), t.capabilities());
        assert_eq!(t.configuration_strategy(), t.configuration_strategy());
        assert_eq!(
            t.validate_transmitter_id("AB12C"),
            t.validate_transmitter_id("AB12C")
        );
    }
}

#[test]
fn test_every_label_parses_back() {
    for t in PeripheralType::ALL {
        assert_eq!(t.label().parse::<PeripheralType>().unwrap(), t);
        assert_eq!(t.id().parse::<PeripheralType>().unwrap(), t);
    }
}
