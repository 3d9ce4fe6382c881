//! Key reference

use super::{Screen, ScreenContext};
use crate::backend::{Terminal, TerminalError};
use crate::palette::SCREEN_TEXT;

const TITLE: &str = "Help Screen";

const KEYS: [&str; 5] = [
    "Arrow Keys - Move selection.",
    "Tab        - Switch between Menu and Screen.",
    "P          - Pause/resume the effect.",
    "R          - Redraw the whole screen.",
    "S          - Start/stop the LED output.",
];

pub struct HelpScreen;

impl Screen for HelpScreen {
    fn label(&self) -> &'static str {
        " Help "
    }

    fn render(&self, term: &mut Terminal<'_>, ctx: &ScreenContext<'_>) -> Result<(), TerminalError> {
        let area = ctx.area;
        term.set_colors(SCREEN_TEXT)?;
        term.print_at(area.row, area.col, TITLE)?;

        for (i, line) in KEYS.iter().enumerate() {
            term.print_at(area.row + 2 + i as u8, area.col, line)?;
        }
        Ok(())
    }
}
