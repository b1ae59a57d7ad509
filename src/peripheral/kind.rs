//! The closed set of supported peripheral types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::category::PeripheralCategory;
use super::strategy::ConfigurationStrategy;
use super::transmitter::{self, TransmitterIdError};
use crate::error::PeripheralError;

/// Supported Bluetooth peripheral types.
///
/// Serialized by stable identifier (see [`PeripheralType::id`]); the label
/// returned by [`PeripheralType::label`] is for display and may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeripheralType {
    /// M5Stack display unit
    #[serde(rename = "m5stack")]
    M5Stack,
    /// M5StickC display unit
    #[serde(rename = "m5stickc")]
    M5StickC,
    /// Libre 2 (EU) read directly over Bluetooth
    Libre2,
    /// MiaoMiao transmitter
    #[serde(rename = "miaomiao")]
    MiaoMiao,
    /// Nano, Bubble and Bubble Mini transmitters
    Bubble,
    /// Dexcom G5, G6 and ONE
    Dexcom,
    /// Dexcom G7, ONE+ and Stelo
    DexcomG7,
    /// Dexcom G4 through a bridge
    DexcomG4,
    /// Blucon transmitter
    Blucon,
    /// BlueReader transmitter
    #[serde(rename = "bluereader")]
    BlueReader,
    /// Droplet transmitter
    Droplet,
    /// GNSentry transmitter
    #[serde(rename = "gnsentry")]
    GnSentry,
    /// Watlaa master
    Watlaa,
    /// Atom transmitter
    Atom,
    /// Libre 3 or any generic device used only as a heartbeat
    #[serde(rename = "libre3_heartbeat")]
    Libre3HeartBeat,
    /// Dexcom G7 used only as a heartbeat
    #[serde(rename = "dexcom_g7_heartbeat")]
    DexcomG7HeartBeat,
    /// OmniPod used only as a heartbeat
    #[serde(rename = "omnipod_heartbeat")]
    OmniPodHeartBeat,
}

impl PeripheralType {
    /// Every peripheral type, in display order.
    pub const ALL: [Self; 17] = [
        Self::M5Stack,
        Self::M5StickC,
        Self::Libre2,
        Self::MiaoMiao,
        Self::Bubble,
        Self::Dexcom,
        Self::DexcomG7,
        Self::DexcomG4,
        Self::Blucon,
        Self::BlueReader,
        Self::Droplet,
        Self::GnSentry,
        Self::Watlaa,
        Self::Atom,
        Self::Libre3HeartBeat,
        Self::DexcomG7HeartBeat,
        Self::OmniPodHeartBeat,
    ];

    /// Stable identifier, used for persistence and on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::M5Stack => "m5stack",
            Self::M5StickC => "m5stickc",
            Self::Libre2 => "libre2",
            Self::MiaoMiao => "miaomiao",
            Self::Bubble => "bubble",
            Self::Dexcom => "dexcom",
            Self::DexcomG7 => "dexcom_g7",
            Self::DexcomG4 => "dexcom_g4",
            Self::Blucon => "blucon",
            Self::BlueReader => "bluereader",
            Self::Droplet => "droplet",
            Self::GnSentry => "gnsentry",
            Self::Watlaa => "watlaa",
            Self::Atom => "atom",
            Self::Libre3HeartBeat => "libre3_heartbeat",
            Self::DexcomG7HeartBeat => "dexcom_g7_heartbeat",
            Self::OmniPodHeartBeat => "omnipod_heartbeat",
        }
    }

    /// Canonical human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::M5Stack => "M5Stack",
            Self::M5StickC => "M5StickC",
            Self::Libre2 => "Libre 2 EU / 2+ EU",
            Self::MiaoMiao => "MiaoMiao",
            Self::Bubble => "Nano / Bubble / Bubble Mini",
            Self::Dexcom => "Dexcom G5 / G6 / ONE",
            Self::DexcomG7 => "Dexcom G7 / ONE+ / Stelo",
            Self::DexcomG4 => "Dexcom G4 (Bridge)",
            Self::Blucon => "Blucon",
            Self::BlueReader => "BlueReader",
            Self::Droplet => "Droplet",
            Self::GnSentry => "GNSentry",
            Self::Watlaa => "Watlaa",
            Self::Atom => "Atom",
            Self::Libre3HeartBeat => "Libre/Generic HeartBeat",
            Self::DexcomG7HeartBeat => "Dexcom G7/ONE+/Stelo HeartBeat",
            Self::OmniPodHeartBeat => "OmniPod HeartBeat",
        }
    }

    /// The category this type belongs to.
    #[must_use]
    pub const fn category(self) -> PeripheralCategory {
        match self {
            Self::M5Stack | Self::M5StickC => PeripheralCategory::M5Stack,
            Self::Dexcom
            | Self::Bubble
            | Self::MiaoMiao
            | Self::Blucon
            | Self::GnSentry
            | Self::BlueReader
            | Self::Droplet
            | Self::DexcomG4
            | Self::Watlaa
            | Self::Libre2
            | Self::Atom
            | Self::DexcomG7 => PeripheralCategory::Cgm,
            Self::Libre3HeartBeat | Self::DexcomG7HeartBeat | Self::OmniPodHeartBeat => {
                PeripheralCategory::HeartBeat
            }
        }
    }

    /// Whether the protocol embeds a transmitter-assigned identifier.
    #[must_use]
    pub const fn needs_transmitter_id(self) -> bool {
        match self {
            Self::Dexcom
            | Self::Blucon
            | Self::DexcomG4
            | Self::Libre3HeartBeat
            | Self::DexcomG7HeartBeat => true,
            Self::M5Stack
            | Self::M5StickC
            | Self::Libre2
            | Self::MiaoMiao
            | Self::Bubble
            | Self::DexcomG7
            | Self::BlueReader
            | Self::Droplet
            | Self::GnSentry
            | Self::Watlaa
            | Self::Atom
            | Self::OmniPodHeartBeat => false,
        }
    }

    /// Whether raw sensor data can be interpreted by the web OOP service.
    ///
    /// Libre2 delivers Libre 1 formatted data after decryption, so the
    /// service can still derive slope parameters for it.
    #[must_use]
    pub const fn supports_out_of_process_computation(self) -> bool {
        match self {
            Self::Bubble | Self::MiaoMiao | Self::Atom | Self::Libre2 => true,
            Self::M5Stack
            | Self::M5StickC
            | Self::Dexcom
            | Self::DexcomG7
            | Self::DexcomG4
            | Self::Blucon
            | Self::BlueReader
            | Self::Droplet
            | Self::GnSentry
            | Self::Watlaa
            | Self::Libre3HeartBeat
            | Self::DexcomG7HeartBeat
            | Self::OmniPodHeartBeat => false,
        }
    }

    /// Whether calibration may use an adjustable slope.
    ///
    /// Enumerated independently of
    /// [`supports_out_of_process_computation`](Self::supports_out_of_process_computation).
    #[must_use]
    pub const fn supports_non_fixed_slope(self) -> bool {
        match self {
            Self::Libre2
            | Self::Bubble
            | Self::MiaoMiao
            | Self::Watlaa
            | Self::Blucon
            | Self::BlueReader
            | Self::Droplet
            | Self::GnSentry
            | Self::Atom => true,
            Self::M5Stack
            | Self::M5StickC
            | Self::Dexcom
            | Self::DexcomG7
            | Self::DexcomG4
            | Self::Libre3HeartBeat
            | Self::DexcomG7HeartBeat
            | Self::OmniPodHeartBeat => false,
        }
    }

    /// Whether an NFC scan must provide the session key before a BLE connect.
    #[must_use]
    pub const fn requires_proximity_scan_before_connect(self) -> bool {
        match self {
            Self::Libre2 => true,
            Self::M5Stack
            | Self::M5StickC
            | Self::MiaoMiao
            | Self::Bubble
            | Self::Dexcom
            | Self::DexcomG7
            | Self::DexcomG4
            | Self::Blucon
            | Self::BlueReader
            | Self::Droplet
            | Self::GnSentry
            | Self::Watlaa
            | Self::Atom
            | Self::Libre3HeartBeat
            | Self::DexcomG7HeartBeat
            | Self::OmniPodHeartBeat => false,
        }
    }

    /// All four capability facts at once.
    #[must_use]
    pub const fn capabilities(self) -> Capabilities {
        Capabilities {
            needs_transmitter_id: self.needs_transmitter_id(),
            supports_out_of_process_computation: self.supports_out_of_process_computation(),
            supports_non_fixed_slope: self.supports_non_fixed_slope(),
            requires_proximity_scan_before_connect: self.requires_proximity_scan_before_connect(),
        }
    }

    /// Check a transmitter ID against this type's rule.
    ///
    /// Returns `None` when the ID is acceptable.
    pub fn validate_transmitter_id(self, transmitter_id: &str) -> Option<TransmitterIdError> {
        transmitter::validate(self, transmitter_id)
    }

    /// The device-specific configuration strategy, if the type has one.
    #[must_use]
    pub const fn configuration_strategy(self) -> Option<ConfigurationStrategy> {
        match self {
            Self::M5Stack => Some(ConfigurationStrategy::M5Stack),
            Self::M5StickC => Some(ConfigurationStrategy::M5StickC),
            Self::Watlaa => Some(ConfigurationStrategy::Watlaa),
            Self::Dexcom => Some(ConfigurationStrategy::DexcomG5),
            Self::Bubble => Some(ConfigurationStrategy::Bubble),
            Self::MiaoMiao => Some(ConfigurationStrategy::MiaoMiao),
            Self::Blucon => Some(ConfigurationStrategy::Blucon),
            Self::GnSentry => Some(ConfigurationStrategy::GnSentry),
            Self::BlueReader => None,
            Self::Droplet => Some(ConfigurationStrategy::Droplet),
            Self::DexcomG4 => Some(ConfigurationStrategy::DexcomG4),
            Self::Libre2 => Some(ConfigurationStrategy::Libre2),
            Self::Atom => Some(ConfigurationStrategy::Atom),
            Self::Libre3HeartBeat => Some(ConfigurationStrategy::Libre3HeartBeat),
            Self::DexcomG7HeartBeat => Some(ConfigurationStrategy::DexcomG7HeartBeat),
            Self::OmniPodHeartBeat => Some(ConfigurationStrategy::OmniPodHeartBeat),
            Self::DexcomG7 => Some(ConfigurationStrategy::DexcomG7),
        }
    }

    /// Resolve a type from its stable identifier or its label.
    ///
    /// Matching is case-insensitive so that records persisted under the
    /// label still resolve.
    pub fn parse(input: &str) -> Option<Self> {
        let needle = input.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(needle) || t.label().eq_ignore_ascii_case(needle))
    }
}

impl fmt::Display for PeripheralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PeripheralType {
    type Err = PeripheralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| PeripheralError::UnknownDeviceType {
            input: s.to_string(),
        })
    }
}

/// Capability facts for one peripheral type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Capabilities {
    pub needs_transmitter_id: bool,
    pub supports_out_of_process_computation: bool,
    pub supports_non_fixed_slope: bool,
    pub requires_proximity_scan_before_connect: bool,
}
