//! Serial terminal console
//!
//! Draws a full-screen, colored text UI on an 80x24 ANSI terminal and turns
//! keystrokes into navigation and device commands.
//!
//! # Screen Layout
//!
//! ```text
//! ╔Pico Pix OS V1.0══════════════════════════════════════════════════════════════╗
//! ║╔════════╗╔══════════════════════════════════════════════════════════════════╗║
//! ║║ Config ║║                                                                  ║║
//! ║║ Effect ║║                 selected screen (66 x 20)                        ║║
//! ║║  ...   ║║                                                                  ║║
//! ║╚════════╝╚══════════════════════════════════════════════════════════════════╝║
//! ╚══════════════════════════════════════════════════════════════════════════════╝
//! ```
//!
//! Repainting is incremental: each region has a dirty flag and only stale
//! regions are redrawn. The logo animation and the pixel dump on the status
//! screen are redrawn every cycle.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod console;
pub mod draw;
pub mod layout;
pub mod palette;
pub mod pinout;
pub mod renderer;
pub mod screens;

#[cfg(test)]
pub(crate) mod testing;

// Re-export key types
pub use backend::{Terminal, TerminalError};
pub use console::{CommandOutcome, Console, CycleOutcome};
pub use renderer::Renderer;
pub use screens::{PixelSource, Screen, ScreenContext};
