//! Pixel data
//!
//! Colors are handled as [`Rgb`] for rendering and stored as [`PackedGrb`]
//! words in the [`PixelBuffer`], which is the order the strip expects them.

pub mod buffer;
pub mod color;

pub use buffer::PixelBuffer;
pub use color::{PackedGrb, Rgb};
