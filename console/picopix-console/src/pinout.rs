//! Pico header pinout diagram
//!
//! The 40-pin header as 20 rows: a left pin label, a slice of the board
//! outline carrying the physical pin numbers, and a right pin label. The
//! GPIO selected for the strip is highlighted.

use crate::backend::{Terminal, TerminalError};
use crate::palette::{pinout as colors, ColorPair};

/// Header rows
pub const PINOUT_ROWS: u8 = 20;

/// Display width of a pin label
pub const LABEL_WIDTH: u8 = 4;

/// Display width of a board segment
pub const BOARD_WIDTH: u8 = 12;

/// Electrical role of a header pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinKind {
    Gpio(u8),
    Ground,
    Power,
    AdcVref,
    Run,
}

/// One header pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderPin {
    pub label: &'static str,
    pub kind: PinKind,
}

impl HeaderPin {
    const fn gpio(label: &'static str, n: u8) -> Self {
        Self {
            label,
            kind: PinKind::Gpio(n),
        }
    }

    const fn power(label: &'static str) -> Self {
        Self {
            label,
            kind: PinKind::Power,
        }
    }

    const GND: Self = Self {
        label: "GND ",
        kind: PinKind::Ground,
    };

    /// Colors for this pin given the GPIO driving the strip
    pub fn colors(&self, selected_gpio: u8) -> ColorPair {
        let bg = match self.kind {
            PinKind::Gpio(n) if n == selected_gpio => return colors::SELECTED,
            PinKind::Gpio(_) => colors::GPIO_BG,
            PinKind::Ground => colors::GROUND_BG,
            PinKind::Power => colors::POWER_BG,
            PinKind::AdcVref => colors::VREF_BG,
            PinKind::Run => colors::RUN_BG,
        };
        ColorPair::new(colors::LABEL_FG, bg)
    }
}

/// Left and right pins of one header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinoutRow {
    pub left: HeaderPin,
    pub right: HeaderPin,
}

const fn row(left: HeaderPin, right: HeaderPin) -> PinoutRow {
    PinoutRow { left, right }
}

/// Header rows, top to bottom with the USB connector up
pub const PINOUT: [PinoutRow; PINOUT_ROWS as usize] = [
    row(HeaderPin::gpio("GP00", 0), HeaderPin::power("VBUS")),
    row(HeaderPin::gpio("GP01", 1), HeaderPin::power("VSYS")),
    row(HeaderPin::GND, HeaderPin::GND),
    row(HeaderPin::gpio("GP02", 2), HeaderPin::power("3V3E")),
    row(HeaderPin::gpio("GP03", 3), HeaderPin::power("3V3 ")),
    row(
        HeaderPin::gpio("GP04", 4),
        HeaderPin {
            label: "VREF",
            kind: PinKind::AdcVref,
        },
    ),
    row(HeaderPin::gpio("GP05", 5), HeaderPin::gpio("GP28", 28)),
    row(HeaderPin::GND, HeaderPin::GND),
    row(HeaderPin::gpio("GP06", 6), HeaderPin::gpio("GP27", 27)),
    row(HeaderPin::gpio("GP07", 7), HeaderPin::gpio("GP26", 26)),
    row(
        HeaderPin::gpio("GP08", 8),
        HeaderPin {
            label: "RUN ",
            kind: PinKind::Run,
        },
    ),
    row(HeaderPin::gpio("GP09", 9), HeaderPin::gpio("GP22", 22)),
    row(HeaderPin::GND, HeaderPin::GND),
    row(HeaderPin::gpio("GP10", 10), HeaderPin::gpio("GP21", 21)),
    row(HeaderPin::gpio("GP11", 11), HeaderPin::gpio("GP20", 20)),
    row(HeaderPin::gpio("GP12", 12), HeaderPin::gpio("GP19", 19)),
    row(HeaderPin::gpio("GP13", 13), HeaderPin::gpio("GP18", 18)),
    row(HeaderPin::GND, HeaderPin::GND),
    row(HeaderPin::gpio("GP14", 14), HeaderPin::gpio("GP17", 17)),
    row(HeaderPin::gpio("GP15", 15), HeaderPin::gpio("GP16", 16)),
];

/// Header row holding a GPIO, and whether it is on the right side
pub fn locate_gpio(gpio: u8) -> Option<(u8, bool)> {
    PINOUT.iter().enumerate().find_map(|(index, r)| {
        if r.left.kind == PinKind::Gpio(gpio) {
            Some((index as u8, false))
        } else if r.right.kind == PinKind::Gpio(gpio) {
            Some((index as u8, true))
        } else {
            None
        }
    })
}

/// Board outline slice for one row, numbered with the physical pins
fn draw_board_segment(term: &mut Terminal<'_>, index: u8) -> Result<(), TerminalError> {
    let left = index + 1;
    let right = 2 * PINOUT_ROWS - index;
    match index {
        0 => write!(term, "┬{:02}─O██O─{:02}┬", left, right),
        i if i == PINOUT_ROWS - 1 => write!(term, "┴{:02}─o──o─{:02}┴", left, right),
        _ => write!(term, "┤{:02}      {:02}├", left, right),
    }
}

/// Draw the diagram with its top-left corner at `(row, col)`
pub fn draw_pinout(
    term: &mut Terminal<'_>,
    row: u8,
    col: u8,
    selected_gpio: u8,
) -> Result<(), TerminalError> {
    let board = ColorPair::new(colors::LABEL_FG, colors::BOARD);

    for (index, pins) in PINOUT.iter().enumerate() {
        term.move_to(row + index as u8, col)?;

        term.set_colors(pins.left.colors(selected_gpio))?;
        term.print(pins.left.label)?;

        term.set_colors(board)?;
        draw_board_segment(term, index as u8)?;

        term.set_colors(pins.right.colors(selected_gpio))?;
        term.print(pins.right.label)?;
    }
    Ok(())
}
