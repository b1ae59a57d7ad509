//! Peripheral records handed to and returned from an object store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::PeripheralCategory;
use super::color::M5StackColor;
use super::kind::PeripheralType;

/// Default text color when no preference is stored.
pub const DEFAULT_TEXT_COLOR: M5StackColor = M5StackColor::White;
/// Default background color for new display units.
pub const DEFAULT_BACKGROUND_COLOR: M5StackColor = M5StackColor::Black;
/// Default screen rotation for new display units.
pub const DEFAULT_ROTATION: u8 = 1;
/// Default brightness (percent) for display units that support it.
pub const DEFAULT_BRIGHTNESS: u8 = 100;

/// Display settings for M5Stack category devices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub text_color: M5StackColor,
    pub background_color: M5StackColor,
    pub rotation: u8,
    /// Absent for models without adjustable backlight (M5StickC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u8>,
}

/// Constructor arguments for a peripheral record.
///
/// Built by the factory and passed to [`ObjectStore::allocate`](crate::store::ObjectStore::allocate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPeripheral {
    pub peripheral_type: PeripheralType,
    pub address: String,
    pub name: String,
    pub alias: Option<String>,
    pub display: Option<DisplaySettings>,
    pub transmitter_id: Option<String>,
    pub ble_password: Option<String>,
}

impl NewPeripheral {
    /// Bare identity with no type-specific defaults.
    #[must_use]
    pub fn new(peripheral_type: PeripheralType, address: &str, name: &str) -> Self {
        Self {
            peripheral_type,
            address: address.to_string(),
            name: name.to_string(),
            alias: None,
            display: None,
            transmitter_id: None,
            ble_password: None,
        }
    }
}

/// A known peripheral, as persisted by an object store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeripheralRecord {
    pub id: Uuid,
    pub peripheral_type: PeripheralType,
    pub address: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplaySettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmitter_id: Option<String>,
    #[serde(skip_serializing)]
    pub ble_password: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PeripheralRecord {
    /// Materialize a record from constructor arguments.
    #[must_use]
    pub fn from_new(new: NewPeripheral, id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            peripheral_type: new.peripheral_type,
            address: new.address,
            name: new.name,
            alias: new.alias,
            display: new.display,
            transmitter_id: new.transmitter_id,
            ble_password: new.ble_password,
            created_at,
        }
    }

    #[must_use]
    pub const fn category(&self) -> PeripheralCategory {
        self.peripheral_type.category()
    }

    /// Alias if set, otherwise the transport-supplied name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}
