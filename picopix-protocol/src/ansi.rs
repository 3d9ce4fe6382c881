//! ANSI escape sequences sent to the terminal
//!
//! Only the handful of sequences the console needs: absolute cursor moves,
//! 24-bit foreground/background colors, cursor hiding, screen clear and
//! attribute reset. Every variant formats through [`core::fmt::Display`] so
//! it can be written to any `fmt::Write` sink without allocation.

use core::fmt;

/// Terminal width in columns
pub const TERM_COLS: u8 = 80;

/// Terminal height in rows
pub const TERM_ROWS: u8 = 24;

/// A single control sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ansi {
    /// Move the cursor to a 1-based row and column
    CursorTo { row: u8, col: u8 },
    /// Truecolor foreground
    Foreground { r: u8, g: u8, b: u8 },
    /// Truecolor background
    Background { r: u8, g: u8, b: u8 },
    /// Hide the text cursor
    HideCursor,
    /// Erase the whole display
    ClearScreen,
    /// Reset all SGR attributes
    Reset,
}

impl fmt::Display for Ansi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Ansi::CursorTo { row, col } => write!(f, "\x1b[{};{}H", row, col),
            Ansi::Foreground { r, g, b } => write!(f, "\x1b[38;2;{};{};{}m", r, g, b),
            Ansi::Background { r, g, b } => write!(f, "\x1b[48;2;{};{};{}m", r, g, b),
            Ansi::HideCursor => f.write_str("\x1b[?25l"),
            Ansi::ClearScreen => f.write_str("\x1b[2J"),
            Ansi::Reset => f.write_str("\x1b[0m"),
        }
    }
}
