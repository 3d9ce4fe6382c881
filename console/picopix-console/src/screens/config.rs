//! Output configuration: header diagram plus the current settings

use super::{Screen, ScreenContext};
use crate::backend::{Terminal, TerminalError};
use crate::palette::SCREEN_TEXT;
use crate::pinout::{draw_pinout, BOARD_WIDTH, LABEL_WIDTH};

/// Gap between the diagram and the settings column
const GAP: u8 = 4;

pub struct ConfigScreen;

impl Screen for ConfigScreen {
    fn label(&self) -> &'static str {
        "Config"
    }

    fn render(&self, term: &mut Terminal<'_>, ctx: &ScreenContext<'_>) -> Result<(), TerminalError> {
        let area = ctx.area;
        let settings = ctx.settings;
        draw_pinout(term, area.row, area.col, settings.led_pin())?;

        let col = area.col + 2 * LABEL_WIDTH + BOARD_WIDTH + GAP;
        term.set_colors(SCREEN_TEXT)?;
        term.move_to(area.row, col)?;
        write!(term, "LED pin    GP{:02}", settings.led_pin())?;
        term.move_to(area.row + 1, col)?;
        write!(term, "LED count  {}", settings.buffer_len())
    }
}
