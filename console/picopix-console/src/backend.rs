//! Terminal output backend
//!
//! [`Terminal`] wraps the serial sink and speaks the small ANSI subset the
//! console needs. Nothing is buffered here; every call goes straight to the
//! sink, which is expected to do its own queueing.

use core::fmt;

use picopix_core::pixel::Rgb;
use picopix_hal::{ByteSink, SerialError};
use picopix_protocol::Ansi;

use crate::palette::ColorPair;

/// Terminal output errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TerminalError {
    /// The serial link refused a write
    Write,
}

impl From<SerialError> for TerminalError {
    fn from(_: SerialError) -> Self {
        TerminalError::Write
    }
}

impl From<fmt::Error> for TerminalError {
    fn from(_: fmt::Error) -> Self {
        TerminalError::Write
    }
}

/// ANSI terminal on top of a byte sink
pub struct Terminal<'a> {
    sink: &'a mut dyn ByteSink,
}

/// Routes `core::fmt` output into the sink
struct SinkWriter<'s, 'a> {
    sink: &'s mut (dyn ByteSink + 'a),
}

impl fmt::Write for SinkWriter<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.sink.write_all(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

impl<'a> Terminal<'a> {
    pub fn new(sink: &'a mut dyn ByteSink) -> Self {
        Self { sink }
    }

    /// Send one control sequence
    pub fn send(&mut self, seq: Ansi) -> Result<(), TerminalError> {
        self.write_fmt(format_args!("{}", seq))
    }

    /// Move the cursor to a 1-based position
    pub fn move_to(&mut self, row: u8, col: u8) -> Result<(), TerminalError> {
        self.send(Ansi::CursorTo { row, col })
    }

    pub fn set_fg(&mut self, color: Rgb) -> Result<(), TerminalError> {
        self.send(Ansi::Foreground {
            r: color.r,
            g: color.g,
            b: color.b,
        })
    }

    pub fn set_bg(&mut self, color: Rgb) -> Result<(), TerminalError> {
        self.send(Ansi::Background {
            r: color.r,
            g: color.g,
            b: color.b,
        })
    }

    /// Set foreground and background together
    pub fn set_colors(&mut self, colors: ColorPair) -> Result<(), TerminalError> {
        self.set_fg(colors.fg)?;
        self.set_bg(colors.bg)
    }

    /// Print text at the cursor
    pub fn print(&mut self, text: &str) -> Result<(), TerminalError> {
        self.sink.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Print text at a position
    pub fn print_at(&mut self, row: u8, col: u8, text: &str) -> Result<(), TerminalError> {
        self.move_to(row, col)?;
        self.print(text)
    }

    /// Print `text` `count` times
    pub fn repeat(&mut self, text: &str, count: u8) -> Result<(), TerminalError> {
        for _ in 0..count {
            self.print(text)?;
        }
        Ok(())
    }

    /// Formatted output, used through `write!`
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), TerminalError> {
        let mut writer = SinkWriter {
            sink: &mut *self.sink,
        };
        fmt::write(&mut writer, args)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), TerminalError> {
        self.sink.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailingSink, RecordingSink};

    #[test]
    fn test_move_and_print() {
        let mut sink = RecordingSink::default();
        let mut term = Terminal::new(&mut sink);
        term.print_at(3, 13, "Hi").unwrap();
        assert_eq!(sink.text(), "\x1b[3;13HHi");
    }

    #[test]
    fn test_colors() {
        let mut sink = RecordingSink::default();
        let mut term = Terminal::new(&mut sink);
        term.set_colors(ColorPair::new(Rgb::new(1, 2, 3), Rgb::BLACK)).unwrap();
        assert_eq!(sink.text(), "\x1b[38;2;1;2;3m\x1b[48;2;0;0;0m");
    }

    #[test]
    fn test_write_macro() {
        let mut sink = RecordingSink::default();
        let mut term = Terminal::new(&mut sink);
        write!(term, "{:02}", 7).unwrap();
        term.repeat("═", 3).unwrap();
        assert_eq!(sink.text(), "07═══");
    }

    #[test]
    fn test_sink_failure_maps_to_write() {
        let mut sink = FailingSink;
        let mut term = Terminal::new(&mut sink);
        assert_eq!(term.print("x"), Err(TerminalError::Write));
        assert_eq!(term.move_to(1, 1), Err(TerminalError::Write));
    }
}
