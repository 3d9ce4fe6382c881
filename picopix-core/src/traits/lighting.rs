//! Lighting peripheral trait
//!
//! The peripheral turns packed color words into the strip's serial signal.
//! Bit-level timing is entirely its concern; the core only hands it one
//! color per call.

use crate::pixel::PackedGrb;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur when driving the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PeripheralError {
    /// The output could not be started (pin unavailable, program not loaded)
    StartFailed,
}

/// Identifies the hardware unit driving the strip
///
/// On the RP2040 this is a PIO block and one of its state machines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PeripheralHandle {
    /// PIO block index
    pub pio: u8,
    /// State machine index within the block
    pub state_machine: u8,
}

/// Trait for addressable LED outputs
pub trait LightingPeripheral {
    /// Route the output to a GPIO and prepare it for streaming
    ///
    /// Returns the handle subsequent calls must use.
    fn configure(&mut self, pin: u8) -> PeripheralHandle;

    /// Start clocking data out
    fn start(&mut self, handle: PeripheralHandle) -> Result<(), PeripheralError>;

    /// Stop clocking data out
    fn stop(&mut self, handle: PeripheralHandle);

    /// Send one color to the strip
    ///
    /// Implementations must accept calls while stopped and drop the color.
    fn emit(&mut self, handle: PeripheralHandle, color: PackedGrb);
}
