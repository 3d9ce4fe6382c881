//! Shared doubles for the console integration tests

#![allow(dead_code)]

use std::collections::VecDeque;

use picopix_core::pixel::PackedGrb;
use picopix_core::traits::{LightingPeripheral, PeripheralError, PeripheralHandle};
use picopix_hal::{ByteSink, ByteSource, SerialError};

/// Terminal that keeps everything written to it
#[derive(Default)]
pub struct RecordingSink {
    pub bytes: Vec<u8>,
}

impl RecordingSink {
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.bytes).unwrap()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.text().contains(needle)
    }

    /// Forget what was written so far
    pub fn take(&mut self) -> String {
        String::from_utf8(std::mem::take(&mut self.bytes)).unwrap()
    }
}

impl ByteSink for RecordingSink {
    fn write_all(&mut self, data: &[u8]) -> Result<(), SerialError> {
        self.bytes.extend_from_slice(data);
        Ok(())
    }
}

/// Keyboard fed by the test
#[derive(Default)]
pub struct Keyboard {
    pending: VecDeque<u8>,
}

impl Keyboard {
    pub fn press(&mut self, bytes: &[u8]) {
        self.pending.extend(bytes.iter().copied());
    }
}

impl ByteSource for Keyboard {
    fn poll_byte(&mut self) -> Option<u8> {
        self.pending.pop_front()
    }
}

/// Strip that records its lifecycle
#[derive(Default)]
pub struct TestStrip {
    pub configured_pins: Vec<u8>,
    pub enabled: bool,
    pub emitted: Vec<PackedGrb>,
}

impl LightingPeripheral for TestStrip {
    fn configure(&mut self, pin: u8) -> PeripheralHandle {
        self.configured_pins.push(pin);
        PeripheralHandle::default()
    }

    fn start(&mut self, _handle: PeripheralHandle) -> Result<(), PeripheralError> {
        self.enabled = true;
        Ok(())
    }

    fn stop(&mut self, _handle: PeripheralHandle) {
        self.enabled = false;
    }

    fn emit(&mut self, _handle: PeripheralHandle, color: PackedGrb) {
        self.emitted.push(color);
    }
}
