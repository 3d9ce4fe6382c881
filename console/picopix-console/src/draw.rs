//! Box-drawing primitives
//!
//! These draw with whatever colors are current; callers set colors first.

use crate::backend::{Terminal, TerminalError};
use crate::layout::Rect;
use crate::palette::ColorPair;

const TOP_LEFT: &str = "╔";
const TOP_RIGHT: &str = "╗";
const BOTTOM_LEFT: &str = "╚";
const BOTTOM_RIGHT: &str = "╝";
const HORIZONTAL: &str = "═";
const VERTICAL: &str = "║";

/// Double-line box outline
pub fn draw_box(term: &mut Terminal<'_>, rect: Rect) -> Result<(), TerminalError> {
    if rect.width < 2 || rect.height < 2 {
        return Ok(());
    }
    let span = rect.width - 2;

    term.move_to(rect.row, rect.col)?;
    term.print(TOP_LEFT)?;
    term.repeat(HORIZONTAL, span)?;
    term.print(TOP_RIGHT)?;

    for row in rect.row + 1..rect.bottom() {
        term.print_at(row, rect.col, VERTICAL)?;
        term.print_at(row, rect.right(), VERTICAL)?;
    }

    term.move_to(rect.bottom(), rect.col)?;
    term.print(BOTTOM_LEFT)?;
    term.repeat(HORIZONTAL, span)?;
    term.print(BOTTOM_RIGHT)
}

/// Paint a rectangle with spaces in the current background
pub fn fill(term: &mut Terminal<'_>, rect: Rect) -> Result<(), TerminalError> {
    for row in rect.row..rect.row + rect.height {
        term.move_to(row, rect.col)?;
        term.repeat(" ", rect.width)?;
    }
    Ok(())
}

/// Framed, filled box with a centered label
pub fn draw_button(
    term: &mut Terminal<'_>,
    rect: Rect,
    label: &str,
    colors: ColorPair,
) -> Result<(), TerminalError> {
    term.set_colors(colors)?;
    draw_box(term, rect)?;

    let inner = rect.inner();
    fill(term, inner)?;

    let len = label.chars().count().min(inner.width as usize) as u8;
    let row = inner.row + inner.height.saturating_sub(1) / 2;
    let col = inner.col + (inner.width - len) / 2;
    term.print_at(row, col, label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSink;
    use picopix_core::pixel::Rgb;

    #[test]
    fn test_box_outline() {
        let mut sink = RecordingSink::default();
        let mut term = Terminal::new(&mut sink);
        draw_box(&mut term, Rect::new(1, 1, 4, 3)).unwrap();
        assert_eq!(
            sink.text(),
            "\x1b[1;1H╔══╗\x1b[2;1H║\x1b[2;4H║\x1b[3;1H╚══╝"
        );
    }

    #[test]
    fn test_degenerate_box_draws_nothing() {
        let mut sink = RecordingSink::default();
        let mut term = Terminal::new(&mut sink);
        draw_box(&mut term, Rect::new(1, 1, 1, 5)).unwrap();
        assert!(sink.bytes.is_empty());
    }

    #[test]
    fn test_fill() {
        let mut sink = RecordingSink::default();
        let mut term = Terminal::new(&mut sink);
        fill(&mut term, Rect::new(5, 7, 3, 2)).unwrap();
        assert_eq!(sink.text(), "\x1b[5;7H   \x1b[6;7H   ");
    }

    #[test]
    fn test_button_label_centered() {
        let mut sink = RecordingSink::default();
        let mut term = Terminal::new(&mut sink);
        let colors = ColorPair::new(Rgb::WHITE, Rgb::BLACK);
        draw_button(&mut term, Rect::new(3, 3, 8, 3), "Config", colors).unwrap();
        // Inner width 6, label width 6: starts right after the border
        assert!(sink.text().ends_with("\x1b[4;4HConfig"));
        assert!(sink.text().starts_with("\x1b[38;2;255;255;255m\x1b[48;2;0;0;0m"));
    }

    #[test]
    fn test_button_short_label() {
        let mut sink = RecordingSink::default();
        let mut term = Terminal::new(&mut sink);
        let colors = ColorPair::new(Rgb::WHITE, Rgb::BLACK);
        draw_button(&mut term, Rect::new(1, 1, 10, 5), "ab", colors).unwrap();
        // Inner 8x3 at (2,2): middle row 3, column 2 + 3
        assert!(sink.text().ends_with("\x1b[3;5Hab"));
    }
}
