//! Dirty-region renderer
//!
//! Regions are repainted in [`Region::ALL`] order and each flag is cleared
//! only once its repaint went through. A failed write aborts the pass and
//! leaves the remaining flags set for the next cycle.
//!
//! The logo and the selected screen's live content are drawn every cycle
//! regardless of the flags.

use picopix_core::config::Settings;
use picopix_core::pixel::Rgb;
use picopix_core::state::{DirtySet, Focus, NavState, Region};
use picopix_protocol::Ansi;

use crate::backend::{Terminal, TerminalError};
use crate::draw::{draw_box, draw_button, fill};
use crate::layout::{button_rect, INNER_CONTENT, INNER_FRAME, LOGO_COL, LOGO_ROW, MENU_FRAME, SCREEN};
use crate::palette::{BORDER_ACTIVE, BORDER_INACTIVE, COLOR_4BIT, MENU_BUTTON, OUTER_BORDER};
use crate::screens::{screen_for, PixelSource, ScreenContext, SCREENS};

/// Animated title drawn over the outer border
pub const LOGO: &str = "Pico Pix OS V1.0";

/// Steps in one logo color rotation
pub const LOGO_STEPS: u8 = COLOR_4BIT.len() as u8;

/// Repaints stale regions and the always-animating elements
#[derive(Debug, Clone)]
pub struct Renderer {
    dirty: DirtySet,
    logo_step: u8,
    brightness_level: u8,
}

impl Renderer {
    /// Everything starts dirty so the first pass draws the full screen
    pub fn new(brightness_level: u8) -> Self {
        Self {
            dirty: DirtySet::all(),
            logo_step: 0,
            brightness_level,
        }
    }

    pub fn dirty(&self) -> DirtySet {
        self.dirty
    }

    pub fn dirty_mut(&mut self) -> &mut DirtySet {
        &mut self.dirty
    }

    pub fn logo_step(&self) -> u8 {
        self.logo_step
    }

    /// One repaint pass
    pub fn render(
        &mut self,
        term: &mut Terminal<'_>,
        nav: &NavState,
        settings: &Settings,
        pixels: &dyn PixelSource,
    ) -> Result<(), TerminalError> {
        let ctx = ScreenContext {
            settings,
            pixels,
            area: INNER_CONTENT,
            brightness_level: self.brightness_level,
        };

        for region in self.dirty.iter() {
            match region {
                Region::Background => repaint_background(term)?,
                Region::MenuFrame => repaint_frames(term, nav.focus())?,
                Region::MenuChoice => repaint_choice(term, nav, &ctx)?,
                // Nothing screen-specific is incremental yet
                Region::MenuScreen => {}
            }
            self.dirty.clear(region);
        }

        draw_logo(term, self.logo_step)?;
        self.logo_step = (self.logo_step + 1) % LOGO_STEPS;

        screen_for(nav.selected_item()).refresh(term, &ctx)?;
        term.flush()
    }
}

fn repaint_background(term: &mut Terminal<'_>) -> Result<(), TerminalError> {
    term.send(Ansi::Reset)?;
    term.send(Ansi::HideCursor)?;
    term.send(Ansi::ClearScreen)?;
    term.set_colors(OUTER_BORDER)?;
    draw_box(term, SCREEN)
}

fn repaint_frames(term: &mut Terminal<'_>, focus: Focus) -> Result<(), TerminalError> {
    let (menu, screen) = match focus {
        Focus::Menu => (BORDER_ACTIVE, BORDER_INACTIVE),
        Focus::Screen => (BORDER_INACTIVE, BORDER_ACTIVE),
    };
    term.set_colors(menu)?;
    draw_box(term, MENU_FRAME)?;
    term.set_colors(screen)?;
    draw_box(term, INNER_FRAME)
}

fn repaint_choice(
    term: &mut Terminal<'_>,
    nav: &NavState,
    ctx: &ScreenContext<'_>,
) -> Result<(), TerminalError> {
    for (index, screen) in SCREENS.iter().enumerate() {
        let index = index as u8;
        let colors = if index == nav.selection() {
            MENU_BUTTON.swapped()
        } else {
            MENU_BUTTON
        };
        draw_button(term, button_rect(index), screen.label(), colors)?;
    }

    term.set_bg(Rgb::BLACK)?;
    fill(term, ctx.area)?;
    screen_for(nav.selected_item()).render(term, ctx)
}

fn draw_logo(term: &mut Terminal<'_>, step: u8) -> Result<(), TerminalError> {
    term.set_bg(Rgb::BLACK)?;
    term.move_to(LOGO_ROW, LOGO_COL)?;
    for (i, ch) in LOGO.char_indices() {
        let color = COLOR_4BIT[(i + step as usize) % COLOR_4BIT.len()];
        term.set_fg(color)?;
        term.print(&LOGO[i..i + ch.len_utf8()])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailingSink, RecordingSink};
    use picopix_core::pixel::{PackedGrb, PixelBuffer};
    use picopix_core::state::UiEvent;

    const ACTIVE: &str = "\x1b[38;2;255;255;255m\x1b[48;2;32;32;64m";
    const INACTIVE: &str = "\x1b[38;2;64;64;64m\x1b[48;2;16;16;32m";

    fn render_once(renderer: &mut Renderer, nav: &NavState, pixels: &PixelBuffer) -> RecordingSink {
        let mut sink = RecordingSink::default();
        let mut term = Terminal::new(&mut sink);
        renderer
            .render(&mut term, nav, &Settings::default(), pixels)
            .unwrap();
        sink
    }

    #[test]
    fn test_first_pass_draws_everything() {
        let mut renderer = Renderer::new(5);
        let pixels = PixelBuffer::new(24);
        let sink = render_once(&mut renderer, &NavState::new(), &pixels);

        assert!(renderer.dirty().is_empty());
        let text = sink.text();
        assert!(text.starts_with("\x1b[0m\x1b[?25l\x1b[2J"));
        // Menu focused: menu frame active, inner frame inactive
        assert!(text.contains(&format!("{}\x1b[2;2H╔", ACTIVE)));
        assert!(text.contains(&format!("{}\x1b[2;12H╔", INACTIVE)));
        for label in ["Config", "Effect", "Inputs", "Status", "Commit", " Help "] {
            assert!(text.contains(label), "{}", label);
        }
        // Config screen shows the pinout
        assert!(text.contains("GP00"));
        assert_eq!(sink.flushes, 1);
    }

    #[test]
    fn test_selected_button_swapped() {
        let mut renderer = Renderer::new(5);
        let sink = render_once(&mut renderer, &NavState::new(), &PixelBuffer::new(1));
        let selected = "\x1b[38;2;16;32;16m\x1b[48;2;64;192;64m\x1b[3;3H╔";
        let normal = "\x1b[38;2;64;192;64m\x1b[48;2;16;32;16m\x1b[6;3H╔";
        assert!(sink.contains(selected));
        assert!(sink.contains(normal));
    }

    #[test]
    fn test_clean_pass_only_animates() {
        let mut renderer = Renderer::new(5);
        let pixels = PixelBuffer::new(24);
        let nav = NavState::new();
        render_once(&mut renderer, &nav, &pixels);

        let sink = render_once(&mut renderer, &nav, &pixels);
        assert!(!sink.contains("\x1b[2J"));
        assert!(!sink.contains("Config"));
        assert!(sink.text().starts_with("\x1b[48;2;0;0;0m\x1b[1;2H"));
        assert_eq!(renderer.logo_step(), 2);
    }

    #[test]
    fn test_logo_step_wraps() {
        let mut renderer = Renderer::new(5);
        let pixels = PixelBuffer::new(1);
        let nav = NavState::new();
        for _ in 0..LOGO_STEPS {
            render_once(&mut renderer, &nav, &pixels);
        }
        assert_eq!(renderer.logo_step(), 0);
    }

    #[test]
    fn test_logo_colors_rotate() {
        let mut sink = RecordingSink::default();
        let mut term = Terminal::new(&mut sink);
        draw_logo(&mut term, 1).unwrap();
        // First character takes palette entry 1
        assert!(sink.contains("\x1b[1;2H\x1b[38;2;192;0;0mP"));
    }

    #[test]
    fn test_focus_change_swaps_frames() {
        let mut renderer = Renderer::new(5);
        let pixels = PixelBuffer::new(1);
        let mut nav = NavState::new();
        render_once(&mut renderer, &nav, &pixels);

        nav.handle(UiEvent::ToggleFocus, renderer.dirty_mut());
        let sink = render_once(&mut renderer, &nav, &pixels);
        assert!(sink.contains(&format!("{}\x1b[2;2H╔", INACTIVE)));
        assert!(sink.contains(&format!("{}\x1b[2;12H╔", ACTIVE)));
        assert!(!sink.contains("Config"));
    }

    #[test]
    fn test_status_dump_every_pass() {
        let mut renderer = Renderer::new(5);
        let mut pixels = PixelBuffer::new(24);
        pixels.set(0, PackedGrb::from_rgb(1, 0, 0));
        let mut nav = NavState::new();
        for _ in 0..3 {
            nav.handle(UiEvent::MoveSelectionDown, renderer.dirty_mut());
        }

        let first = render_once(&mut renderer, &nav, &pixels);
        assert!(first.contains("Pixel Buffer Status"));
        assert!(first.contains("\x1b[4;13H\x1b[38;2;223;255;255m\x1b[48;2;32;0;0m00"));

        let second = render_once(&mut renderer, &nav, &pixels);
        assert!(!second.contains("Pixel Buffer Status"));
        assert!(second.contains("\x1b[4;13H"));
        assert!(second.text().ends_with("23"));
    }

    #[test]
    fn test_no_dump_off_status() {
        let mut renderer = Renderer::new(5);
        let pixels = PixelBuffer::new(24);
        let nav = NavState::new();
        render_once(&mut renderer, &nav, &pixels);
        let sink = render_once(&mut renderer, &nav, &pixels);
        assert!(!sink.contains("\x1b[4;13H"));
    }

    #[test]
    fn test_menu_screen_flag_consumed() {
        let mut renderer = Renderer::new(5);
        let pixels = PixelBuffer::new(1);
        let nav = NavState::new();
        render_once(&mut renderer, &nav, &pixels);

        renderer.dirty_mut().mark_dirty(Region::MenuScreen);
        render_once(&mut renderer, &nav, &pixels);
        assert!(renderer.dirty().is_empty());
    }

    #[test]
    fn test_write_failure_keeps_flags() {
        let mut renderer = Renderer::new(5);
        let mut sink = FailingSink;
        let mut term = Terminal::new(&mut sink);
        let result = renderer.render(
            &mut term,
            &NavState::new(),
            &Settings::default(),
            &PixelBuffer::new(1),
        );
        assert_eq!(result, Err(TerminalError::Write));
        assert_eq!(renderer.dirty(), DirtySet::all());
        assert_eq!(renderer.logo_step(), 0);
    }
}
