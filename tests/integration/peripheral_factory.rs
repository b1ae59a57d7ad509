//! Integration tests for the peripheral factory and pairing flow.

use periph::error::{PeripheralError, Result};
use periph::peripheral::{
    create_peripheral, pair_peripheral, M5StackColor, PairingRequest, PeripheralCategory,
    PeripheralType, DEFAULT_BACKGROUND_COLOR, DEFAULT_BRIGHTNESS, DEFAULT_ROTATION,
    DEFAULT_TEXT_COLOR,
};
use periph::preferences::{MemoryPreferences, PreferenceKey, PreferenceSource};
use periph::store::MemoryStore;

use crate::common::init_test_logging;

/// Preference source whose backing storage is unavailable.
struct BrokenPreferences;

impl PreferenceSource for BrokenPreferences {
    fn get(&self, key: PreferenceKey) -> Result<Option<String>> {
        Err(PeripheralError::Other(format!("preference store offline reading {key}")))
    }
}

#[test]
fn test_m5stack_without_preferences_gets_builtin_text_color() {
    init_test_logging();
    let mut store = MemoryStore::new();
    let record = create_peripheral(
        PeripheralType::M5Stack,
        "30:AE:A4:00:00:01",
        "M5Stack",
        &MemoryPreferences::new(),
        &mut store,
    )
    .unwrap();

    let display = record.display.expect("M5Stack records carry display settings");
    assert_eq!(display.text_color, DEFAULT_TEXT_COLOR);
    assert_eq!(display.background_color, DEFAULT_BACKGROUND_COLOR);
    assert_eq!(display.rotation, DEFAULT_ROTATION);
    assert_eq!(display.brightness, Some(DEFAULT_BRIGHTNESS));
    assert!(record.alias.is_none());
}

#[test]
fn test_m5stack_uses_stored_preferences() {
    let prefs = MemoryPreferences::new()
        .with(PreferenceKey::M5StackTextColor, "0xF800")
        .with(PreferenceKey::M5StackBlePassword, "m5pass");
    let mut store = MemoryStore::new();
    let record =
        create_peripheral(PeripheralType::M5Stack, "AA", "M5Stack", &prefs, &mut store).unwrap();

    assert_eq!(record.display.unwrap().text_color, M5StackColor::Red);
    assert_eq!(record.ble_password.as_deref(), Some("m5pass"));
}

#[test]
fn test_every_type_creates_record_in_its_category() {
    let prefs = MemoryPreferences::new();
    let mut store = MemoryStore::new();
    for (i, t) in PeripheralType::ALL.into_iter().enumerate() {
        let address = format!("00:00:00:00:00:{i:02X}");
        let record = create_peripheral(t, &address, t.label(), &prefs, &mut store).unwrap();
        assert_eq!(record.peripheral_type, t);
        assert_eq!(record.category(), t.category());
        assert_eq!(
            record.display.is_some(),
            t.category() == PeripheralCategory::M5Stack,
            "{t:?}"
        );
        assert!(record.transmitter_id.is_none());
    }
    assert_eq!(store.records().len(), PeripheralType::ALL.len());
}

#[test]
fn test_preference_errors_surface_unchanged() {
    let mut store = MemoryStore::new();
    let err = create_peripheral(
        PeripheralType::M5StickC,
        "AA",
        "M5StickC",
        &BrokenPreferences,
        &mut store,
    )
    .unwrap_err();
    assert!(matches!(err, PeripheralError::Other(ref msg) if msg.contains("offline")));
    assert_eq!(store.allocation_count(), 0);
}

#[test]
fn test_cgm_types_never_read_preferences() {
    let mut store = MemoryStore::new();
    let record = create_peripheral(
        PeripheralType::Bubble,
        "AA",
        "Bubble",
        &BrokenPreferences,
        &mut store,
    )
    .unwrap();
    assert_eq!(record.name, "Bubble");
}

#[test]
fn test_pairing_flow_heartbeat_needs_id_without_rule() {
    let mut store = MemoryStore::new();
    let request = PairingRequest::new(PeripheralType::DexcomG7HeartBeat, "AA", "DX01")
        .with_transmitter_id("anything");
    let record = pair_peripheral(&request, &MemoryPreferences::new(), &mut store).unwrap();
    assert_eq!(record.transmitter_id.as_deref(), Some("anything"));
    assert_eq!(record.category(), PeripheralCategory::HeartBeat);
}
