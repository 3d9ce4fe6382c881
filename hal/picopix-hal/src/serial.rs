//! Serial link abstractions
//!
//! The console talks to the operator's terminal over a byte-oriented serial
//! link. Input is polled without blocking, output is written in full.

/// Errors from the serial link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialError {
    /// Underlying transmit failed
    Write,
    /// Underlying receive failed
    Read,
}

/// Nonblocking byte source
///
/// `poll_byte` returns the next received byte, or `None` if nothing is
/// available right now. It must never wait for data.
pub trait ByteSource {
    /// Read one byte if one is available
    fn poll_byte(&mut self) -> Option<u8>;
}

/// Byte sink for terminal output
pub trait ByteSink {
    /// Write all bytes to the link
    ///
    /// Returns only once every byte has been queued or an error occurs.
    fn write_all(&mut self, data: &[u8]) -> Result<(), SerialError>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), SerialError> {
        Ok(())
    }
}

impl<T: ByteSource + ?Sized> ByteSource for &mut T {
    fn poll_byte(&mut self) -> Option<u8> {
        (**self).poll_byte()
    }
}

impl<T: ByteSink + ?Sized> ByteSink for &mut T {
    fn write_all(&mut self, data: &[u8]) -> Result<(), SerialError> {
        (**self).write_all(data)
    }

    fn flush(&mut self) -> Result<(), SerialError> {
        (**self).flush()
    }
}

/// Serial link configuration
#[derive(Debug, Clone, Copy)]
pub struct SerialConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baudrate: 115200,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataBits {
    Seven,
    Eight,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopBits {
    One,
    Two,
}
