//! Buffered UART as the console's serial link
//!
//! Both halves sit on the interrupt-driven ring buffers from
//! `BufferedUart`, so polling input never blocks and output only waits
//! when the transmit buffer is full.

use embassy_rp::uart::{self, BufferedUartRx, BufferedUartTx, Config as UartConfig};
use embedded_io::{Read, ReadReady, Write};
use picopix_hal::serial::{DataBits, Parity, StopBits};
use picopix_hal::{ByteSink, ByteSource, SerialConfig, SerialError};

/// Embassy UART settings for a serial link configuration
pub fn uart_config(serial: &SerialConfig) -> UartConfig {
    let mut config = UartConfig::default();
    config.baudrate = serial.baudrate;
    config.data_bits = match serial.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    config.parity = match serial.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    config.stop_bits = match serial.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    config
}

/// Receive half
pub struct UartSource {
    rx: BufferedUartRx,
}

impl UartSource {
    pub fn new(rx: BufferedUartRx) -> Self {
        Self { rx }
    }
}

impl ByteSource for UartSource {
    fn poll_byte(&mut self) -> Option<u8> {
        // Line errors read as "nothing available"
        if !self.rx.read_ready().unwrap_or(false) {
            return None;
        }
        let mut byte = [0u8; 1];
        match self.rx.read(&mut byte) {
            Ok(1) => Some(byte[0]),
            _ => None,
        }
    }
}

/// Transmit half
pub struct UartSink {
    tx: BufferedUartTx,
}

impl UartSink {
    pub fn new(tx: BufferedUartTx) -> Self {
        Self { tx }
    }
}

impl ByteSink for UartSink {
    fn write_all(&mut self, data: &[u8]) -> Result<(), SerialError> {
        self.tx.write_all(data).map_err(|_| SerialError::Write)
    }

    fn flush(&mut self) -> Result<(), SerialError> {
        self.tx.flush().map_err(|_| SerialError::Write)
    }
}
