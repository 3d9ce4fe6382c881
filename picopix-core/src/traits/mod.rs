//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod lighting;

pub use lighting::{LightingPeripheral, PeripheralError, PeripheralHandle};
