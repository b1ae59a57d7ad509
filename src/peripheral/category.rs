use std::fmt;

use serde::Serialize;

/// Coarse grouping of peripheral types sharing a UI and behavior class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PeripheralCategory {
    /// M5Stack-style display units
    M5Stack,
    /// Continuous glucose monitors and their transmitters
    Cgm,
    /// Devices used only as a heartbeat to wake the app
    HeartBeat,
}

impl PeripheralCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 3] = [Self::M5Stack, Self::Cgm, Self::HeartBeat];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::M5Stack => "M5Stack",
            Self::Cgm => "CGM",
            Self::HeartBeat => "HeartBeat",
        }
    }
}

impl fmt::Display for PeripheralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
