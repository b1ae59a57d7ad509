//! Durable storage through the factory and pairing flow.

use periph::error::PeripheralError;
use periph::peripheral::{
    create_peripheral, pair_peripheral, M5StackColor, PairingRequest, PeripheralType,
};
use periph::preferences::{PreferenceSource, TomlPreferences};
use periph::store::SqliteStore;

use crate::common::fixtures::TestWorkspace;

#[test]
fn test_records_survive_reopen() {
    let ws = TestWorkspace::new();
    let prefs = TomlPreferences::load(&ws.preferences_path()).unwrap();

    let created = {
        let mut store = SqliteStore::open(ws.db_path()).unwrap();
        let request = PairingRequest::new(PeripheralType::Blucon, "BB:01", "BLU12345")
            .with_transmitter_id("12345");
        pair_peripheral(&request, &prefs, &mut store).unwrap()
    };

    let store = SqliteStore::open(ws.db_path()).unwrap();
    let found = store.find_by_address("BB:01").unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.peripheral_type, PeripheralType::Blucon);
    assert_eq!(found.transmitter_id.as_deref(), Some("12345"));
}

#[test]
fn test_toml_preferences_feed_factory() {
    let ws = TestWorkspace::with_preferences(
        "m5stack_text_color = \"cyan\"\nm5stack_ble_password = \"secret\"\n",
    );
    let prefs = TomlPreferences::load(&ws.preferences_path()).unwrap();
    assert_eq!(prefs.m5stack_text_color().unwrap(), Some(M5StackColor::Cyan));

    let mut store = SqliteStore::open(ws.db_path()).unwrap();
    create_peripheral(PeripheralType::M5Stack, "M5:01", "M5Stack", &prefs, &mut store).unwrap();

    let found = store.find_by_address("M5:01").unwrap().unwrap();
    assert_eq!(found.display.unwrap().text_color, M5StackColor::Cyan);
    assert_eq!(found.ble_password.as_deref(), Some("secret"));
}

#[test]
fn test_malformed_preferences_rejected() {
    let ws = TestWorkspace::with_preferences("m5stack_text_color = [");
    let err = TomlPreferences::load(&ws.preferences_path()).unwrap_err();
    assert!(matches!(err, PeripheralError::PreferencesParse(_)));
}

#[test]
fn test_invalid_pairing_leaves_store_empty() {
    let ws = TestWorkspace::new();
    let prefs = TomlPreferences::load(&ws.preferences_path()).unwrap();
    let mut store = SqliteStore::open(ws.db_path()).unwrap();

    let request =
        PairingRequest::new(PeripheralType::Dexcom, "DX:01", "Dexcom").with_transmitter_id("AB12C");
    assert!(matches!(
        pair_peripheral(&request, &prefs, &mut store),
        Err(PeripheralError::InvalidTransmitterId { .. })
    ));
    assert!(store.list().unwrap().is_empty());
}
