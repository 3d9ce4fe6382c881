//! Board-agnostic core logic for the LED strip controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Device settings and the settings blob format
//! - Pixel buffer and color packing
//! - Effect engine (fills the buffer, streams it to the strip)
//! - Console navigation state machine and dirty-region tracking
//! - Shared device state used by both execution contexts
//! - Lighting peripheral trait

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod config;
pub mod effect;
pub mod pixel;
pub mod shared;
pub mod state;
pub mod traits;
