//! The pairing flow: validate user input, then create the record.

use serde::Serialize;
use tracing::{debug, instrument};

use super::factory::build_new_peripheral;
use super::kind::PeripheralType;
use super::record::PeripheralRecord;
use crate::error::{PeripheralError, Result};
use crate::preferences::PreferenceSource;
use crate::store::ObjectStore;

/// What the user confirmed on the pairing screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairingRequest {
    pub peripheral_type: PeripheralType,
    pub address: String,
    pub name: String,
    pub transmitter_id: Option<String>,
}

impl PairingRequest {
    #[must_use]
    pub fn new(peripheral_type: PeripheralType, address: &str, name: &str) -> Self {
        Self {
            peripheral_type,
            address: address.to_string(),
            name: name.to_string(),
            transmitter_id: None,
        }
    }

    #[must_use]
    pub fn with_transmitter_id(mut self, transmitter_id: &str) -> Self {
        self.transmitter_id = Some(transmitter_id.to_string());
        self
    }
}

/// Validate `request` and persist the resulting peripheral.
///
/// Nothing reaches the store unless every check passes.
#[instrument(skip_all, fields(peripheral_type = request.peripheral_type.id(), address = %request.address))]
pub fn pair_peripheral<P, S>(
    request: &PairingRequest,
    preferences: &P,
    store: &mut S,
) -> Result<PeripheralRecord>
where
    P: PreferenceSource + ?Sized,
    S: ObjectStore + ?Sized,
{
    let peripheral_type = request.peripheral_type;
    let address = request.address.trim();
    let name = request.name.trim();

    if address.is_empty() {
        return Err(PeripheralError::InvalidArgument("address must not be empty".to_string()));
    }
    if name.is_empty() {
        return Err(PeripheralError::InvalidArgument("name must not be empty".to_string()));
    }

    let transmitter_id = request
        .transmitter_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty());

    let transmitter_id = match (peripheral_type.needs_transmitter_id(), transmitter_id) {
        (true, None) => return Err(PeripheralError::MissingTransmitterId { device_type: peripheral_type }),
        (true, Some(id)) => {
            if let Some(reason) = peripheral_type.validate_transmitter_id(id) {
                return Err(PeripheralError::InvalidTransmitterId {
                    device_type: peripheral_type,
                    transmitter_id: id.to_string(),
                    reason,
                });
            }
            Some(id.to_string())
        }
        (false, Some(id)) => {
            debug!(transmitter_id = id, "Ignoring transmitter ID for type that does not use one");
            None
        }
        (false, None) => None,
    };

    let mut new = build_new_peripheral(peripheral_type, address, name, preferences)?;
    new.transmitter_id = transmitter_id;
    store.allocate(new)
}
