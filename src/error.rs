//! Error types for peripheral registry operations.

use thiserror::Error;

use crate::peripheral::{PeripheralType, TransmitterIdError};

/// Primary error type for peripheral operations.
#[derive(Error, Debug)]
pub enum PeripheralError {
    // Registry errors
    #[error("Unknown device type: {input}")]
    UnknownDeviceType { input: String },

    // Pairing errors
    #[error("{device_type} requires a transmitter ID")]
    MissingTransmitterId { device_type: PeripheralType },

    #[error("Invalid transmitter ID '{transmitter_id}' for {device_type}: {reason}")]
    InvalidTransmitterId {
        device_type: PeripheralType,
        transmitter_id: String,
        reason: TransmitterIdError,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // Storage errors
    #[error("A peripheral with address {address} is already stored")]
    DuplicateAddress { address: String },

    #[error("Peripheral not found: {address}")]
    PeripheralNotFound { address: String },

    #[error("Storage error during {operation}: {reason}")]
    Storage { operation: String, reason: String },

    // Preference errors
    #[error("Preferences parse error: {0}")]
    PreferencesParse(String),

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl PeripheralError {
    /// Build a storage error from the failing operation and its cause.
    pub fn storage(operation: &str, reason: impl std::fmt::Display) -> Self {
        Self::Storage {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Returns true if the error is recoverable by the user.
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UnknownDeviceType { .. }
                | Self::MissingTransmitterId { .. }
                | Self::InvalidTransmitterId { .. }
                | Self::InvalidArgument(_)
                | Self::DuplicateAddress { .. }
                | Self::PeripheralNotFound { .. }
                | Self::PreferencesParse(_)
        )
    }

    /// Returns a suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnknownDeviceType { .. } => Some("Run: periph types"),
            Self::MissingTransmitterId { .. } => Some("Pass --transmitter-id <ID>"),
            Self::InvalidTransmitterId { .. } => {
                Some("Check the transmitter ID printed on the sensor or its packaging")
            }
            Self::DuplicateAddress { .. } => Some("Remove the stored peripheral first: periph remove <ADDRESS>"),
            Self::PeripheralNotFound { .. } => Some("Run: periph list"),
            Self::PreferencesParse(_) => Some("Fix or delete the preferences file"),
            _ => None,
        }
    }
}

/// Convenience type alias for Results using PeripheralError.
pub type Result<T> = std::result::Result<T, PeripheralError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    fn storage_context(self, operation: &str) -> Result<T>;
}

impl<T, E: std::error::Error> ResultExt<T> for std::result::Result<T, E> {
    fn storage_context(self, operation: &str) -> Result<T> {
        self.map_err(|e| PeripheralError::storage(operation, e))
    }
}
