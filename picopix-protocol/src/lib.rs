//! Pico Pix Serial Terminal Protocol
//!
//! This crate defines both directions of the serial link between the Pico Pix
//! controller and the operator's terminal emulator.
//!
//! # Protocol Overview
//!
//! Input is plain keystrokes. Single bytes map directly to commands, the
//! arrow keys arrive as three-byte CSI sequences:
//! ```text
//! ┌─────┬─────┬───────┐
//! │ ESC │  [  │ A / B │
//! │ 1B  │ 1B  │ 1B    │
//! └─────┴─────┴───────┘
//! ```
//!
//! Output is text interleaved with ANSI cursor-positioning and 24-bit SGR
//! color sequences on an 80x24 grid with 1-based coordinates.

#![no_std]
#![deny(unsafe_code)]

pub mod ansi;
pub mod decoder;
pub mod events;

pub use ansi::Ansi;
pub use decoder::{Decoded, InputDecoder, SequencePolicy};
pub use events::UiEvent;
