//! Peripheral type registry.
//!
//! [`PeripheralType`] is the closed set of supported devices. Every
//! per-type question (category, capabilities, transmitter ID rule,
//! configuration strategy, construction defaults) is answered by an
//! exhaustive `match`, so adding a variant fails to compile until each
//! of them handles it.

mod category;
mod color;
mod factory;
mod kind;
mod pairing;
mod record;
mod strategy;
mod transmitter;

pub use category::PeripheralCategory;
pub use color::M5StackColor;
pub use factory::{build_new_peripheral, create_peripheral};
pub use kind::{Capabilities, PeripheralType};
pub use pairing::{pair_peripheral, PairingRequest};
pub use record::{
    DisplaySettings, NewPeripheral, PeripheralRecord, DEFAULT_BACKGROUND_COLOR,
    DEFAULT_BRIGHTNESS, DEFAULT_ROTATION, DEFAULT_TEXT_COLOR,
};
pub use strategy::ConfigurationStrategy;
pub use transmitter::TransmitterIdError;
