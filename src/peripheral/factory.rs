//! Construction of new peripheral records with per-type defaults.

use tracing::{debug, info};

use super::kind::PeripheralType;
use super::record::{
    DisplaySettings, NewPeripheral, PeripheralRecord, DEFAULT_BACKGROUND_COLOR,
    DEFAULT_BRIGHTNESS, DEFAULT_ROTATION, DEFAULT_TEXT_COLOR,
};
use crate::error::Result;
use crate::preferences::PreferenceSource;
use crate::store::ObjectStore;

/// Build the constructor arguments for a new peripheral of `peripheral_type`.
///
/// Reads display defaults from `preferences`; does not touch any store.
pub fn build_new_peripheral<P>(
    peripheral_type: PeripheralType,
    address: &str,
    name: &str,
    preferences: &P,
) -> Result<NewPeripheral>
where
    P: PreferenceSource + ?Sized,
{
    let mut new = NewPeripheral::new(peripheral_type, address, name);

    match peripheral_type {
        PeripheralType::M5Stack => {
            new.display = Some(display_defaults(preferences, Some(DEFAULT_BRIGHTNESS))?);
            // may be absent
            new.ble_password = preferences.m5stack_ble_password()?;
        }
        PeripheralType::M5StickC => {
            new.display = Some(display_defaults(preferences, None)?);
        }
        PeripheralType::Watlaa
        | PeripheralType::Dexcom
        | PeripheralType::Bubble
        | PeripheralType::MiaoMiao
        | PeripheralType::Blucon
        | PeripheralType::GnSentry
        | PeripheralType::BlueReader
        | PeripheralType::Droplet
        | PeripheralType::DexcomG4
        | PeripheralType::Libre2
        | PeripheralType::Atom
        | PeripheralType::Libre3HeartBeat
        | PeripheralType::DexcomG7HeartBeat
        | PeripheralType::OmniPodHeartBeat
        | PeripheralType::DexcomG7 => {}
    }

    debug!(
        peripheral_type = peripheral_type.id(),
        address,
        has_display = new.display.is_some(),
        has_password = new.ble_password.is_some(),
        "Built new peripheral"
    );
    Ok(new)
}

fn display_defaults<P>(preferences: &P, brightness: Option<u8>) -> Result<DisplaySettings>
where
    P: PreferenceSource + ?Sized,
{
    let text_color = preferences
        .m5stack_text_color()?
        .unwrap_or(DEFAULT_TEXT_COLOR);

    Ok(DisplaySettings {
        text_color,
        background_color: DEFAULT_BACKGROUND_COLOR,
        rotation: DEFAULT_ROTATION,
        brightness,
    })
}

/// Create and persist a new peripheral record.
///
/// Any transmitter ID must already have been validated by the caller.
/// Errors from `preferences` or `store` are returned as they were raised.
pub fn create_peripheral<P, S>(
    peripheral_type: PeripheralType,
    address: &str,
    name: &str,
    preferences: &P,
    store: &mut S,
) -> Result<PeripheralRecord>
where
    P: PreferenceSource + ?Sized,
    S: ObjectStore + ?Sized,
{
    let new = build_new_peripheral(peripheral_type, address, name, preferences)?;
    let record = store.allocate(new)?;
    info!(
        id = %record.id,
        peripheral_type = record.peripheral_type.id(),
        category = %record.category(),
        "Created peripheral"
    );
    Ok(record)
}
