//! GPIO numbering helpers
//!
//! The RP2040 exposes bank 0 GPIOs 0 through 29.

/// Number of user GPIOs in bank 0
pub const GPIO_COUNT: u8 = 30;

/// Check if a GPIO number exists on the chip
pub const fn is_valid_gpio(pin: u8) -> bool {
    pin < GPIO_COUNT
}
