//! RP2040-specific HAL for the LED strip controller
//!
//! Implementations of the board-agnostic traits on RP2040 hardware:
//!
//! - GPIO bank with runtime pin selection
//! - PIO-driven WS2812 output (implements `LightingPeripheral`)
//! - Buffered UART as the console's byte source and sink

#![no_std]

pub mod pins;
pub mod uart;
pub mod ws2812;

pub use pins::{PinBankPeripherals, PinError, RemainingPeripherals};
pub use uart::{uart_config, UartSink, UartSource};
pub use ws2812::Ws2812;
