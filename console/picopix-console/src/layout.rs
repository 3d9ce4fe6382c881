//! Screen geometry
//!
//! All positions are 1-based terminal coordinates on the 80x24 grid.

use picopix_core::state::MENU_ITEMS;
use picopix_protocol::ansi::{TERM_COLS, TERM_ROWS};

/// Rectangle on the terminal grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub row: u8,
    pub col: u8,
    pub width: u8,
    pub height: u8,
}

impl Rect {
    pub const fn new(row: u8, col: u8, width: u8, height: u8) -> Self {
        Self {
            row,
            col,
            width,
            height,
        }
    }

    /// Area inside a one-cell border
    pub const fn inner(self) -> Self {
        Self {
            row: self.row + 1,
            col: self.col + 1,
            width: self.width.saturating_sub(2),
            height: self.height.saturating_sub(2),
        }
    }

    /// Last row covered
    pub const fn bottom(self) -> u8 {
        self.row + self.height - 1
    }

    /// Last column covered
    pub const fn right(self) -> u8 {
        self.col + self.width - 1
    }
}

/// Whole terminal, framed by the outer border
pub const SCREEN: Rect = Rect::new(1, 1, TERM_COLS, TERM_ROWS);

pub const BUTTON_WIDTH: u8 = 8;
pub const BUTTON_HEIGHT: u8 = 3;

/// Frame holding the menu buttons
pub const MENU_FRAME: Rect = Rect::new(2, 2, BUTTON_WIDTH + 2, MENU_ITEMS * BUTTON_HEIGHT + 2);

/// Frame around the selected screen
pub const INNER_FRAME: Rect = Rect::new(2, 12, 68, 22);

/// Drawable area of the selected screen
pub const INNER_CONTENT: Rect = INNER_FRAME.inner();

/// Logo position, on top of the outer border
pub const LOGO_ROW: u8 = 1;
pub const LOGO_COL: u8 = 2;

/// Position of the menu button at `index`
pub const fn button_rect(index: u8) -> Rect {
    let frame = MENU_FRAME.inner();
    Rect::new(
        frame.row + index * BUTTON_HEIGHT,
        frame.col,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    )
}
