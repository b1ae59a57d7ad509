//! Transmitter ID validation through the public registry API.

use periph::peripheral::{PeripheralType, TransmitterIdError};

#[test]
fn test_dexcom_g5_g6() {
    let t = PeripheralType::Dexcom;
    assert_eq!(t.validate_transmitter_id("AB12CD"), None);
    assert_eq!(
        t.validate_transmitter_id("AB12C"),
        Some(TransmitterIdError::ShouldHaveLength6)
    );
    assert_eq!(
        t.validate_transmitter_id("AB12!D"),
        Some(TransmitterIdError::DexcomInvalidCharacters)
    );
}

#[test]
fn test_dexcom_g4_reports_characters_before_length() {
    let t = PeripheralType::DexcomG4;
    assert_eq!(t.validate_transmitter_id("AB1C2"), None);
    assert_eq!(
        t.validate_transmitter_id("AB1!2"),
        Some(TransmitterIdError::DexcomInvalidCharacters)
    );
    assert_eq!(
        t.validate_transmitter_id("AB12"),
        Some(TransmitterIdError::ShouldHaveLength5)
    );
}

#[test]
fn test_blucon() {
    let t = PeripheralType::Blucon;
    assert_eq!(t.validate_transmitter_id("12345"), None);
    assert_eq!(
        t.validate_transmitter_id("1234"),
        Some(TransmitterIdError::BluconFormat)
    );
    assert_eq!(
        t.validate_transmitter_id("12a45"),
        Some(TransmitterIdError::BluconFormat)
    );
}

#[test]
fn test_types_without_rules_always_valid() {
    let ruled = [
        PeripheralType::Dexcom,
        PeripheralType::DexcomG4,
        PeripheralType::Blucon,
    ];
    for t in PeripheralType::ALL.into_iter().filter(|t| !ruled.contains(t)) {
        assert_eq!(t.validate_transmitter_id(""), None, "{t:?}");
        assert_eq!(t.validate_transmitter_id("not an id!"), None, "{t:?}");
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(
        TransmitterIdError::ShouldHaveLength6.to_string(),
        "transmitter ID must have length 6"
    );
    assert_eq!(
        TransmitterIdError::ShouldHaveLength5.to_string(),
        "transmitter ID must have length 5"
    );
    assert_eq!(
        TransmitterIdError::DexcomInvalidCharacters.to_string(),
        "transmitter ID contains invalid characters"
    );
}
