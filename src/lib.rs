//! CGM peripheral registry library.
//!
//! Answers every per-device question a pairing flow asks about a supported
//! Bluetooth peripheral type, and builds the record that gets persisted once
//! the user confirms.
//!
//! # Modules
//!
//! - `peripheral`: The closed type registry, transmitter ID rules and the record factory
//! - `preferences`: Read-only preference sources consulted by the factory
//! - `store`: Object stores that persist peripheral records
//! - `config`: Default file locations
//! - `error`: Error types with user-recoverable hints
//! - `logging`: Tracing subscriber setup for the CLI
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod peripheral;
pub mod preferences;
pub mod store;
