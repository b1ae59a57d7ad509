//! In-memory object store for tests and embedding.
//!
//! Records every allocation and supports one-shot error injection so
//! callers can check how storage failures surface.
//!
//! # Example
//!
//! ```rust,ignore
//! use periph::store::{MemoryStore, ObjectStore};
//! use periph::error::PeripheralError;
//!
//! let mut store = MemoryStore::new();
//! store.inject_error(PeripheralError::storage("insert", "disk full"));
//! assert!(store.allocate(new_peripheral).is_err());
//! ```

use std::sync::Mutex;

use chrono::Utc;
use tracing::{debug, trace};
use uuid::Uuid;

use super::ObjectStore;
use crate::error::{PeripheralError, Result};
use crate::peripheral::{NewPeripheral, PeripheralRecord};

/// Object store that keeps records in a `Vec`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<PeripheralRecord>,
    error_injection: Mutex<Option<PeripheralError>>,
    allocation_count: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next allocation fail with `error`.
    pub fn inject_error(&self, error: PeripheralError) {
        debug!(%error, "Injecting store error");
        *self
            .error_injection
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(error);
    }

    fn take_injected_error(&self) -> Option<PeripheralError> {
        self.error_injection
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .take()
    }

    /// All stored records, in allocation order.
    #[must_use]
    pub fn records(&self) -> &[PeripheralRecord] {
        &self.records
    }

    /// Number of allocation attempts, including failed ones.
    #[must_use]
    pub const fn allocation_count(&self) -> usize {
        self.allocation_count
    }

    #[must_use]
    pub fn find_by_address(&self, address: &str) -> Option<&PeripheralRecord> {
        self.records.iter().find(|r| r.address == address)
    }

    /// Remove the record with `address`, returning it.
    pub fn remove(&mut self, address: &str) -> Result<PeripheralRecord> {
        let index = self
            .records
            .iter()
            .position(|r| r.address == address)
            .ok_or_else(|| PeripheralError::PeripheralNotFound {
                address: address.to_string(),
            })?;
        Ok(self.records.remove(index))
    }
}

impl ObjectStore for MemoryStore {
    fn allocate(&mut self, new: NewPeripheral) -> Result<PeripheralRecord> {
        self.allocation_count += 1;

        if let Some(error) = self.take_injected_error() {
            return Err(error);
        }

        if self.find_by_address(&new.address).is_some() {
            return Err(PeripheralError::DuplicateAddress {
                address: new.address,
            });
        }

        let record = PeripheralRecord::from_new(new, Uuid::new_v4(), Utc::now());
        trace!(id = %record.id, address = %record.address, "Allocated in-memory record");
        self.records.push(record.clone());
        Ok(record)
    }
}
