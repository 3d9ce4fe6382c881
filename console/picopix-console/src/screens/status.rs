//! Live pixel buffer view
//!
//! Each buffer slot is shown as a two-character cell: its index (mod 100)
//! printed on the slot's color. Stored colors are dim, so they are shifted
//! up by the brightness level before display, and the digits use the
//! inverted color to stay readable.

use picopix_core::pixel::Rgb;

use super::{PixelSource, Screen, ScreenContext};
use crate::backend::{Terminal, TerminalError};
use crate::layout::Rect;
use crate::palette::SCREEN_TEXT;

const TITLE: &str = "Pixel Buffer Status";

/// Characters per cell
const CELL_WIDTH: u8 = 2;

/// How many cells fit in the dump area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpLayout {
    pub rows: u8,
    pub cols: u8,
}

impl DumpLayout {
    /// Rows of full-width cells for `len` slots, capped to the area
    pub fn new(area: Rect, len: usize) -> Self {
        let per_row = (area.width / CELL_WIDTH) as usize;
        if per_row == 0 || len == 0 {
            return Self { rows: 0, cols: 0 };
        }
        let rows = (1 + 2 * len / area.width as usize).min(area.height as usize);
        Self {
            rows: rows as u8,
            cols: per_row.min(len) as u8,
        }
    }
}

/// One rendered slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCell {
    /// Two-digit label
    pub label: u8,
    pub fg: Rgb,
    pub bg: Rgb,
}

/// Cell for display position `index`; positions past the end wrap around
pub fn status_cell(pixels: &dyn PixelSource, index: usize, brightness_level: u8) -> Option<StatusCell> {
    let len = pixels.pixel_count();
    if len == 0 {
        return None;
    }
    let slot = index % len;
    let bg = pixels.pixel(slot).to_rgb().shifted(brightness_level);
    Some(StatusCell {
        label: (slot % 100) as u8,
        fg: bg.inverted(),
        bg,
    })
}

/// Draw the buffer into `area`, one row at a time
pub fn draw_status_dump(
    term: &mut Terminal<'_>,
    area: Rect,
    pixels: &dyn PixelSource,
    brightness_level: u8,
) -> Result<(), TerminalError> {
    let layout = DumpLayout::new(area, pixels.pixel_count());
    let mut index = 0usize;

    for row in 0..layout.rows {
        term.move_to(area.row + row, area.col)?;
        for _ in 0..layout.cols {
            let Some(cell) = status_cell(pixels, index, brightness_level) else {
                return Ok(());
            };
            term.set_fg(cell.fg)?;
            term.set_bg(cell.bg)?;
            write!(term, "{:02}", cell.label)?;
            index += 1;
        }
    }
    Ok(())
}

/// Dump area: everything below the title row
fn dump_area(area: Rect) -> Rect {
    Rect::new(area.row + 1, area.col, area.width, area.height.saturating_sub(1))
}

pub struct StatusScreen;

impl Screen for StatusScreen {
    fn label(&self) -> &'static str {
        "Status"
    }

    fn render(&self, term: &mut Terminal<'_>, ctx: &ScreenContext<'_>) -> Result<(), TerminalError> {
        term.set_colors(SCREEN_TEXT)?;
        term.print_at(ctx.area.row, ctx.area.col, TITLE)
    }

    fn refresh(&self, term: &mut Terminal<'_>, ctx: &ScreenContext<'_>) -> Result<(), TerminalError> {
        draw_status_dump(term, dump_area(ctx.area), ctx.pixels, ctx.brightness_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::INNER_CONTENT;
    use crate::testing::RecordingSink;
    use picopix_core::pixel::{PackedGrb, PixelBuffer};

    #[test]
    fn test_layout_default_strip() {
        // 24 slots fit on one 33-cell row
        let layout = DumpLayout::new(dump_area(INNER_CONTENT), 24);
        assert_eq!(layout, DumpLayout { rows: 1, cols: 24 });
    }

    #[test]
    fn test_layout_long_strip() {
        let area = dump_area(INNER_CONTENT);
        assert_eq!(DumpLayout::new(area, 100), DumpLayout { rows: 4, cols: 33 });
        // Never spills past the area
        assert_eq!(DumpLayout::new(area, 5000).rows, area.height);
    }

    #[test]
    fn test_layout_empty() {
        assert_eq!(DumpLayout::new(INNER_CONTENT, 0).rows, 0);
        assert_eq!(DumpLayout::new(Rect::new(1, 1, 1, 5), 10).rows, 0);
    }

    #[test]
    fn test_cell_colors() {
        let mut pixels = PixelBuffer::new(3);
        pixels.set(2, PackedGrb::from_rgb(1, 2, 3));

        let cell = status_cell(&pixels, 2, 5).unwrap();
        assert_eq!(cell.label, 2);
        assert_eq!(cell.bg, Rgb::new(32, 64, 96));
        assert_eq!(cell.fg, Rgb::new(223, 191, 159));
    }

    #[test]
    fn test_cell_wraps() {
        let pixels = PixelBuffer::new(3);
        assert_eq!(status_cell(&pixels, 4, 5), status_cell(&pixels, 1, 5));
        assert_eq!(status_cell(&pixels, 4, 5).unwrap().label, 1);
    }

    #[test]
    fn test_label_mod_100() {
        let pixels = PixelBuffer::new(150);
        assert_eq!(status_cell(&pixels, 123, 0).unwrap().label, 23);
    }

    #[test]
    fn test_draw_dump() {
        let mut pixels = PixelBuffer::new(2);
        pixels.set(0, PackedGrb::from_rgb(0, 0, 0));
        pixels.set(1, PackedGrb::from_rgb(7, 7, 7));

        let mut sink = RecordingSink::default();
        let mut term = Terminal::new(&mut sink);
        draw_status_dump(&mut term, Rect::new(4, 13, 66, 19), &pixels, 5).unwrap();

        assert_eq!(
            sink.text(),
            "\x1b[4;13H\
             \x1b[38;2;255;255;255m\x1b[48;2;0;0;0m00\
             \x1b[38;2;31;31;31m\x1b[48;2;224;224;224m01"
        );
    }
}
