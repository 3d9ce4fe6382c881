//! Configuration types
//!
//! Device settings, loop parameters and the settings blob format.

#[cfg(feature = "serde")]
pub mod blob;
pub mod store;
pub mod types;

#[cfg(feature = "serde")]
pub use blob::{decode_settings, encode_settings, BlobError, MAX_BLOB_SIZE};
pub use store::{load_or_default, InertStore, SettingsStore};
pub use types::*;
