use super::{Screen, ScreenContext};
use crate::backend::{Terminal, TerminalError};
use crate::palette::SCREEN_TEXT;

/// Screen with nothing but a title
pub struct PlaceholderScreen {
    pub label: &'static str,
    pub title: &'static str,
}

impl Screen for PlaceholderScreen {
    fn label(&self) -> &'static str {
        self.label
    }

    fn render(&self, term: &mut Terminal<'_>, ctx: &ScreenContext<'_>) -> Result<(), TerminalError> {
        term.set_colors(SCREEN_TEXT)?;
        term.print_at(ctx.area.row, ctx.area.col, self.title)
    }
}
