//! Pixel buffer
//!
//! Mirrors the physical strip. The effect engine is the only writer; the
//! console reads it for the status view. Indices wrap modulo the length so
//! a reader holding a stale length never faults after a resize.

use alloc::vec;
use alloc::vec::Vec;

use super::color::PackedGrb;

/// Heap-backed sequence of packed colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    slots: Vec<PackedGrb>,
}

impl PixelBuffer {
    /// Allocate a buffer of `len` black pixels
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![PackedGrb::BLACK; len],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Read a slot, wrapping the index
    ///
    /// An empty buffer reads as black.
    pub fn get(&self, index: usize) -> PackedGrb {
        if self.slots.is_empty() {
            return PackedGrb::BLACK;
        }
        self.slots[index % self.slots.len()]
    }

    /// Write a slot, wrapping the index
    pub fn set(&mut self, index: usize, color: PackedGrb) {
        if self.slots.is_empty() {
            return;
        }
        let len = self.slots.len();
        self.slots[index % len] = color;
    }

    /// Replace the storage with `len` black pixels
    ///
    /// The old allocation is released. Contents are not carried over.
    pub fn resize(&mut self, len: usize) {
        self.slots = vec![PackedGrb::BLACK; len];
    }

    pub fn iter(&self) -> impl Iterator<Item = PackedGrb> + '_ {
        self.slots.iter().copied()
    }

    pub fn as_slice(&self) -> &[PackedGrb] {
        &self.slots
    }
}
