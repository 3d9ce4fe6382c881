//! Configuration type definitions
//!
//! [`Settings`] is the runtime device record. The parameter structs carry
//! compile-time defaults for the two loops.

use heapless::String;

use picopix_hal::gpio::is_valid_gpio;
pub use picopix_protocol::SequencePolicy;

use crate::traits::PeripheralHandle;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Format tag written at the front of every settings blob
pub const FORMAT_TAG: &str = "Pico Pix OS V1.0";

/// Maximum format tag length
pub const FORMAT_TAG_LEN: usize = 16;

/// Default LED data pin
pub const DEFAULT_LED_PIN: u8 = 0;

/// Default number of LEDs
pub const DEFAULT_BUFFER_LEN: usize = 24;

/// Largest supported strip
pub const MAX_BUFFER_LEN: usize = u16::MAX as usize;

/// Errors from settings validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Pin is not a bank 0 GPIO
    InvalidPin,
    /// Buffer length is zero or too large
    InvalidBufferLength,
}

/// Device settings
///
/// The run flag is runtime-only: it is never persisted and always boots
/// false.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settings {
    format: String<FORMAT_TAG_LEN>,
    /// Peripheral unit driving the strip
    pub handle: PeripheralHandle,
    led_pin: u8,
    buffer_len: u16,
    #[cfg_attr(feature = "serde", serde(skip))]
    running: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let mut format = String::new();
        // FORMAT_TAG is exactly FORMAT_TAG_LEN bytes
        let _ = format.push_str(FORMAT_TAG);
        Self {
            format,
            handle: PeripheralHandle::default(),
            led_pin: DEFAULT_LED_PIN,
            buffer_len: DEFAULT_BUFFER_LEN as u16,
            running: false,
        }
    }
}

impl Settings {
    /// Format tag this record was created with
    pub fn format(&self) -> &str {
        self.format.as_str()
    }

    /// Check the tag against the current firmware's
    pub fn is_current_format(&self) -> bool {
        self.format.as_str() == FORMAT_TAG
    }

    /// GPIO carrying the LED data signal
    pub fn led_pin(&self) -> u8 {
        self.led_pin
    }

    /// Requested number of LEDs
    pub fn buffer_len(&self) -> usize {
        self.buffer_len as usize
    }

    /// Whether the peripheral has been started
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Choose the LED data pin
    pub fn select_pin(&mut self, pin: u8) -> Result<(), SettingsError> {
        if !is_valid_gpio(pin) {
            return Err(SettingsError::InvalidPin);
        }
        self.led_pin = pin;
        Ok(())
    }

    /// Choose the number of LEDs
    pub fn set_buffer_len(&mut self, len: usize) -> Result<(), SettingsError> {
        if len == 0 || len > MAX_BUFFER_LEN {
            return Err(SettingsError::InvalidBufferLength);
        }
        self.buffer_len = len as u16;
        Ok(())
    }

    /// Record whether the peripheral is running
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Check invariants on a record that came from outside
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !is_valid_gpio(self.led_pin) {
            return Err(SettingsError::InvalidPin);
        }
        if self.buffer_len == 0 {
            return Err(SettingsError::InvalidBufferLength);
        }
        Ok(())
    }
}

/// Effect selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EffectKind {
    /// Every pixel gets a fresh random color each cycle
    #[default]
    Random,
}

/// Effect engine parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EffectConfig {
    /// Active effect
    pub effect: EffectKind,
    /// Per-channel mask applied to generated colors
    pub brightness_mask: u8,
    /// Cycle period in milliseconds
    pub period_ms: u32,
    /// Random generator seed
    pub seed: u32,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            effect: EffectKind::Random,
            brightness_mask: 0x07,
            period_ms: 100,
            seed: 0x2545_F491,
        }
    }
}

/// Console loop parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConsoleConfig {
    /// Cycle period in milliseconds
    pub period_ms: u32,
    /// Left shift applied to stored colors in the status dump
    pub brightness_level: u8,
    /// Handling of escape sequences split across polls
    pub sequence_policy: SequencePolicy,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            period_ms: 100,
            brightness_level: 5,
            sequence_policy: SequencePolicy::DropIncomplete,
        }
    }
}
