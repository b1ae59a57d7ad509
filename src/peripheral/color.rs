//! RGB565 colors understood by M5Stack firmware.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PeripheralError;

/// Colors an M5Stack can render text and background in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum M5StackColor {
    Black,
    Navy,
    DarkGreen,
    DarkCyan,
    Maroon,
    Purple,
    Olive,
    LightGrey,
    DarkGrey,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
    Orange,
    GreenYellow,
    Pink,
}

impl M5StackColor {
    pub const ALL: [Self; 19] = [
        Self::Black,
        Self::Navy,
        Self::DarkGreen,
        Self::DarkCyan,
        Self::Maroon,
        Self::Purple,
        Self::Olive,
        Self::LightGrey,
        Self::DarkGrey,
        Self::Blue,
        Self::Green,
        Self::Cyan,
        Self::Red,
        Self::Magenta,
        Self::Yellow,
        Self::White,
        Self::Orange,
        Self::GreenYellow,
        Self::Pink,
    ];

    /// RGB565 value sent to the device.
    #[must_use]
    pub const fn rgb565(self) -> u16 {
        match self {
            Self::Black => 0x0000,
            Self::Navy => 0x000F,
            Self::DarkGreen => 0x03E0,
            Self::DarkCyan => 0x03EF,
            Self::Maroon => 0x7800,
            Self::Purple => 0x780F,
            Self::Olive => 0x7BE0,
            Self::LightGrey => 0xC618,
            Self::DarkGrey => 0x7BEF,
            Self::Blue => 0x001F,
            Self::Green => 0x07E0,
            Self::Cyan => 0x07FF,
            Self::Red => 0xF800,
            Self::Magenta => 0xF81F,
            Self::Yellow => 0xFFE0,
            Self::White => 0xFFFF,
            Self::Orange => 0xFDA0,
            Self::GreenYellow => 0xB7E0,
            Self::Pink => 0xFC9F,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Navy => "navy",
            Self::DarkGreen => "dark_green",
            Self::DarkCyan => "dark_cyan",
            Self::Maroon => "maroon",
            Self::Purple => "purple",
            Self::Olive => "olive",
            Self::LightGrey => "light_grey",
            Self::DarkGrey => "dark_grey",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Red => "red",
            Self::Magenta => "magenta",
            Self::Yellow => "yellow",
            Self::White => "white",
            Self::Orange => "orange",
            Self::GreenYellow => "green_yellow",
            Self::Pink => "pink",
        }
    }

    /// Look up a color by its RGB565 value.
    #[must_use]
    pub fn from_rgb565(value: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.rgb565() == value)
    }
}

impl fmt::Display for M5StackColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for M5StackColor {
    type Err = PeripheralError;

    /// Parse a color name (`"white"`, `"dark-grey"`), a hex value
    /// (`"0xFFFF"`) or a decimal RGB565 value (`"65535"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let invalid = || PeripheralError::InvalidArgument(format!("unknown M5Stack color: {s}"));

        let numeric = if let Some(hex) = input
            .strip_prefix("0x")
            .or_else(|| input.strip_prefix("0X"))
        {
            Some(u16::from_str_radix(hex, 16).map_err(|_| invalid())?)
        } else if input.chars().all(|c| c.is_ascii_digit()) && !input.is_empty() {
            Some(input.parse::<u16>().map_err(|_| invalid())?)
        } else {
            None
        };

        if let Some(value) = numeric {
            return Self::from_rgb565(value).ok_or_else(invalid);
        }

        let normalized = input.to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|c| c.name() == normalized)
            .ok_or_else(invalid)
    }
}
