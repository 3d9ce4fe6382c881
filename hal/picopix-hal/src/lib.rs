//! Pico Pix Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits shared by the
//! board-agnostic crates and implemented by chip-specific HALs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  picopix-console / picopix-firmware     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  picopix-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ picopix-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`serial::ByteSource`] - Nonblocking byte poll from the serial link
//! - [`serial::ByteSink`] - Byte output to the serial link
//! - [`gpio`] - GPIO numbering helpers

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod serial;

// Re-export key traits at crate root for convenience
pub use gpio::{is_valid_gpio, GPIO_COUNT};
pub use serial::{ByteSink, ByteSource, SerialConfig, SerialError};
