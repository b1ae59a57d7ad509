//! Object stores that allocate and persist peripheral records.
//!
//! The registry only needs [`ObjectStore::allocate`]. The concrete stores
//! add the queries the command-line front end uses.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::{default_db_path, SqliteStore};

use crate::error::Result;
use crate::peripheral::{NewPeripheral, PeripheralRecord};

/// Allocates and persists peripheral records.
///
/// Implementations own durability. Whatever error they return reaches the
/// caller of the factory unchanged.
pub trait ObjectStore {
    /// Persist a new record built from `new` and return it.
    fn allocate(&mut self, new: NewPeripheral) -> Result<PeripheralRecord>;
}
