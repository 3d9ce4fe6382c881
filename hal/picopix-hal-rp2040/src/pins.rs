//! GPIO bank with runtime pin selection
//!
//! The LED data pin is a setting, so the GPIO driving the strip is only
//! known at runtime. Every pin that can carry the signal sits in a typed
//! slot of [`PinBankPeripherals`] until a PIO block claims it by number.
//!
//! GPIO8 and GPIO9 carry the console UART and are never part of the bank.

use embassy_rp::peripherals;
use embassy_rp::pio::{Common, Instance};
use embassy_rp::{Peri, Peripherals};
use picopix_hal::is_valid_gpio;

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already handed out
    AlreadyTaken,
    /// Pin is wired to another function
    Reserved,
}

/// Peripherals other than the pin bank
pub struct RemainingPeripherals {
    pub pio0: Peri<'static, peripherals::PIO0>,
    pub uart1: Peri<'static, peripherals::UART1>,
    pub uart_tx: Peri<'static, peripherals::PIN_8>,
    pub uart_rx: Peri<'static, peripherals::PIN_9>,
    pub core1: Peri<'static, peripherals::CORE1>,
}

macro_rules! pin_bank {
    ($($n:literal => $field:ident : $pin:ident),* $(,)?) => {
        /// GPIOs available for the LED data line
        ///
        /// Using `Option` lets pins be taken one at a time by number.
        pub struct PinBankPeripherals {
            $(pub $field: Option<Peri<'static, peripherals::$pin>>,)*
        }

        impl PinBankPeripherals {
            /// Split the Embassy peripherals into the bank and the rest
            pub fn from_peripherals(p: Peripherals) -> (Self, RemainingPeripherals) {
                let pins = Self {
                    $($field: Some(p.$pin),)*
                };
                let remaining = RemainingPeripherals {
                    pio0: p.PIO0,
                    uart1: p.UART1,
                    uart_tx: p.PIN_8,
                    uart_rx: p.PIN_9,
                    core1: p.CORE1,
                };
                (pins, remaining)
            }

            /// Check if a pin can still be taken
            pub fn is_available(&self, gpio: u8) -> bool {
                match gpio {
                    $($n => self.$field.is_some(),)*
                    _ => false,
                }
            }

            /// Take a pin by number and hand it to a PIO block
            pub fn take_pio_pin<'d, PIO: Instance>(
                &mut self,
                common: &mut Common<'d, PIO>,
                gpio: u8,
            ) -> Result<embassy_rp::pio::Pin<'d, PIO>, PinError> {
                if !is_valid_gpio(gpio) {
                    return Err(PinError::InvalidPin);
                }
                match gpio {
                    $($n => self
                        .$field
                        .take()
                        .map(|pin| common.make_pio_pin(pin))
                        .ok_or(PinError::AlreadyTaken),)*
                    _ => Err(PinError::Reserved),
                }
            }
        }
    };
}

pin_bank! {
    0 => pin0: PIN_0,
    1 => pin1: PIN_1,
    2 => pin2: PIN_2,
    3 => pin3: PIN_3,
    4 => pin4: PIN_4,
    5 => pin5: PIN_5,
    6 => pin6: PIN_6,
    7 => pin7: PIN_7,
    10 => pin10: PIN_10,
    11 => pin11: PIN_11,
    12 => pin12: PIN_12,
    13 => pin13: PIN_13,
    14 => pin14: PIN_14,
    15 => pin15: PIN_15,
    16 => pin16: PIN_16,
    17 => pin17: PIN_17,
    18 => pin18: PIN_18,
    19 => pin19: PIN_19,
    20 => pin20: PIN_20,
    21 => pin21: PIN_21,
    22 => pin22: PIN_22,
    23 => pin23: PIN_23,
    24 => pin24: PIN_24,
    25 => pin25: PIN_25,
    26 => pin26: PIN_26,
    27 => pin27: PIN_27,
    28 => pin28: PIN_28,
    29 => pin29: PIN_29,
}
