use serde::Serialize;

use super::kind::PeripheralType;

/// Handle selecting the device-specific settings screen for a peripheral.
///
/// The registry only picks the handle. The settings UI that owns each
/// variant decides what to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigurationStrategy {
    M5Stack,
    #[serde(rename = "m5stickc")]
    M5StickC,
    Watlaa,
    DexcomG5,
    Bubble,
    #[serde(rename = "miaomiao")]
    MiaoMiao,
    Blucon,
    #[serde(rename = "gnsentry")]
    GnSentry,
    Droplet,
    DexcomG4,
    Libre2,
    Atom,
    #[serde(rename = "libre3_heartbeat")]
    Libre3HeartBeat,
    #[serde(rename = "dexcom_g7_heartbeat")]
    DexcomG7HeartBeat,
    #[serde(rename = "omnipod_heartbeat")]
    OmniPodHeartBeat,
    DexcomG7,
}

impl ConfigurationStrategy {
    /// The peripheral type this strategy configures.
    #[must_use]
    pub const fn peripheral_type(self) -> PeripheralType {
        match self {
            Self::M5Stack => PeripheralType::M5Stack,
            Self::M5StickC => PeripheralType::M5StickC,
            Self::Watlaa => PeripheralType::Watlaa,
            Self::DexcomG5 => PeripheralType::Dexcom,
            Self::Bubble => PeripheralType::Bubble,
            Self::MiaoMiao => PeripheralType::MiaoMiao,
            Self::Blucon => PeripheralType::Blucon,
            Self::GnSentry => PeripheralType::GnSentry,
            Self::Droplet => PeripheralType::Droplet,
            Self::DexcomG4 => PeripheralType::DexcomG4,
            Self::Libre2 => PeripheralType::Libre2,
            Self::Atom => PeripheralType::Atom,
            Self::Libre3HeartBeat => PeripheralType::Libre3HeartBeat,
            Self::DexcomG7HeartBeat => PeripheralType::DexcomG7HeartBeat,
            Self::OmniPodHeartBeat => PeripheralType::OmniPodHeartBeat,
            Self::DexcomG7 => PeripheralType::DexcomG7,
        }
    }
}
