//! Events that drive the navigation state machine
//!
//! Events come straight from the keystroke decoder, so the type is shared
//! with the protocol crate.

pub use picopix_protocol::UiEvent;
