//! Serial link doubles for unit tests

use picopix_hal::{ByteSink, ByteSource, SerialError};

/// Sink that keeps everything written to it
#[derive(Default)]
pub(crate) struct RecordingSink {
    pub bytes: Vec<u8>,
    pub flushes: usize,
}

impl RecordingSink {
    pub fn text(&self) -> &str {
        core::str::from_utf8(&self.bytes).unwrap()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.text().contains(needle)
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }
}

impl ByteSink for RecordingSink {
    fn write_all(&mut self, data: &[u8]) -> Result<(), SerialError> {
        self.bytes.extend_from_slice(data);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SerialError> {
        self.flushes += 1;
        Ok(())
    }
}

/// Sink whose link is down
pub(crate) struct FailingSink;

impl ByteSink for FailingSink {
    fn write_all(&mut self, _data: &[u8]) -> Result<(), SerialError> {
        Err(SerialError::Write)
    }
}

/// Source that replays a fixed script, one byte per poll
pub(crate) struct Script {
    bytes: Vec<u8>,
    pos: usize,
}

impl Script {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            pos: 0,
        }
    }
}

impl ByteSource for Script {
    fn poll_byte(&mut self) -> Option<u8> {
        let byte = self.bytes.get(self.pos).copied()?;
        self.pos += 1;
        Some(byte)
    }
}
