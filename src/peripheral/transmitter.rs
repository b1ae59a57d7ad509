//! Transmitter ID validation.
//!
//! Each rule runs its checks in a fixed order, and that order decides which
//! message the user sees when an ID breaks more than one constraint:
//!
//! | Type | Length | Characters | First check |
//! |------|--------|------------|-------------|
//! | Dexcom G5/G6 | 6 | `[A-Za-z0-9]` | length |
//! | Dexcom G4 | 5 | `[A-Za-z0-9]` | characters |
//! | Blucon | 5 | `^[0-9]{1,5}$` | pattern |
//!
//! Every other type accepts any ID.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::trace;

use super::kind::PeripheralType;

static ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("alphanumeric pattern is valid"));

static BLUCON_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,5}$").expect("blucon pattern is valid"));

/// Why a transmitter ID was rejected.
///
/// Each variant maps to one localizable message identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransmitterIdError {
    /// The ID must be exactly 6 characters.
    ShouldHaveLength6,
    /// The ID must be exactly 5 characters.
    ShouldHaveLength5,
    /// The ID contains characters other than letters and digits.
    DexcomInvalidCharacters,
    /// The ID is not a 5 digit Blucon number.
    BluconFormat,
}

impl TransmitterIdError {
    /// Opaque message identifier for localization lookups.
    #[must_use]
    pub const fn message_id(self) -> &'static str {
        match self {
            Self::ShouldHaveLength6 => "transmitter_id_should_have_length_6",
            Self::ShouldHaveLength5 => "transmitter_id_should_have_length_5",
            Self::DexcomInvalidCharacters => "dexcom_transmitter_id_invalid_characters",
            Self::BluconFormat => "transmitter_id_blucon",
        }
    }
}

impl fmt::Display for TransmitterIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::ShouldHaveLength6 => "transmitter ID must have length 6",
            Self::ShouldHaveLength5 => "transmitter ID must have length 5",
            Self::DexcomInvalidCharacters => "transmitter ID contains invalid characters",
            Self::BluconFormat => {
                "transmitter ID must be the 5 digits after 'BLU' on the Blucon"
            }
        };
        f.write_str(text)
    }
}

impl std::error::Error for TransmitterIdError {}

/// Validate `transmitter_id` against the rule for `peripheral_type`.
pub(crate) fn validate(
    peripheral_type: PeripheralType,
    transmitter_id: &str,
) -> Option<TransmitterIdError> {
    let result = match peripheral_type {
        PeripheralType::Dexcom => validate_dexcom(transmitter_id),
        PeripheralType::DexcomG4 => validate_dexcom_g4(transmitter_id),
        PeripheralType::Blucon => validate_blucon(transmitter_id),
        PeripheralType::M5Stack
        | PeripheralType::M5StickC
        | PeripheralType::Libre2
        | PeripheralType::MiaoMiao
        | PeripheralType::Bubble
        | PeripheralType::DexcomG7
        | PeripheralType::BlueReader
        | PeripheralType::Droplet
        | PeripheralType::GnSentry
        | PeripheralType::Watlaa
        | PeripheralType::Atom
        | PeripheralType::Libre3HeartBeat
        | PeripheralType::DexcomG7HeartBeat
        | PeripheralType::OmniPodHeartBeat => None,
    };

    trace!(
        peripheral_type = peripheral_type.id(),
        transmitter_id,
        error = ?result,
        "Validated transmitter ID"
    );
    result
}

fn validate_dexcom(transmitter_id: &str) -> Option<TransmitterIdError> {
    if transmitter_id.chars().count() != 6 {
        return Some(TransmitterIdError::ShouldHaveLength6);
    }
    if !ALPHANUMERIC.is_match(transmitter_id) {
        return Some(TransmitterIdError::DexcomInvalidCharacters);
    }
    None
}

fn validate_dexcom_g4(transmitter_id: &str) -> Option<TransmitterIdError> {
    if !ALPHANUMERIC.is_match(transmitter_id) {
        return Some(TransmitterIdError::DexcomInvalidCharacters);
    }
    if transmitter_id.chars().count() != 5 {
        return Some(TransmitterIdError::ShouldHaveLength5);
    }
    None
}

fn validate_blucon(transmitter_id: &str) -> Option<TransmitterIdError> {
    if !BLUCON_DIGITS.is_match(transmitter_id) {
        return Some(TransmitterIdError::BluconFormat);
    }
    // The pattern already caps the length at 5; this rejects 1 to 4 digits.
    if transmitter_id.chars().count() != 5 {
        return Some(TransmitterIdError::BluconFormat);
    }
    None
}
