//! Inner-screen content
//!
//! Each menu entry owns one [`Screen`]. A screen is drawn in full when the
//! menu choice changes and may also refresh a live part every cycle.

mod config;
mod help;
mod placeholder;
pub mod status;

use picopix_core::config::Settings;
use picopix_core::pixel::{PackedGrb, PixelBuffer};
use picopix_core::shared::SharedState;
use picopix_core::state::{MenuItem, MENU_ITEMS};
use picopix_core::traits::LightingPeripheral;

use crate::backend::{Terminal, TerminalError};
use crate::layout::Rect;

pub use config::ConfigScreen;
pub use help::HelpScreen;
pub use placeholder::PlaceholderScreen;
pub use status::StatusScreen;

/// Read access to the pixel buffer for rendering
pub trait PixelSource {
    /// Number of slots
    fn pixel_count(&self) -> usize;

    /// Color at a slot, wrapping the index
    fn pixel(&self, index: usize) -> PackedGrb;
}

impl PixelSource for PixelBuffer {
    fn pixel_count(&self) -> usize {
        self.len()
    }

    fn pixel(&self, index: usize) -> PackedGrb {
        self.get(index)
    }
}

impl<P: LightingPeripheral> PixelSource for SharedState<P> {
    fn pixel_count(&self) -> usize {
        self.buffer_len()
    }

    fn pixel(&self, index: usize) -> PackedGrb {
        self.read_pixel(index)
    }
}

/// What a screen may look at while drawing
pub struct ScreenContext<'a> {
    /// Settings snapshot taken at the start of the cycle
    pub settings: &'a Settings,
    /// Live pixel data
    pub pixels: &'a dyn PixelSource,
    /// Drawable area
    pub area: Rect,
    /// Left shift applied to stored colors before display
    pub brightness_level: u8,
}

/// One inner screen
pub trait Screen: Sync {
    /// Menu button label
    fn label(&self) -> &'static str;

    /// Draw the whole screen into a blanked area
    fn render(&self, term: &mut Terminal<'_>, ctx: &ScreenContext<'_>)
        -> Result<(), TerminalError>;

    /// Redraw live content; called every cycle while the screen is selected
    fn refresh(
        &self,
        _term: &mut Terminal<'_>,
        _ctx: &ScreenContext<'_>,
    ) -> Result<(), TerminalError> {
        Ok(())
    }
}

/// Screens in menu order
pub static SCREENS: [&dyn Screen; MENU_ITEMS as usize] = [
    &ConfigScreen,
    &PlaceholderScreen {
        label: "Effect",
        title: "Effect Settings",
    },
    &PlaceholderScreen {
        label: "Inputs",
        title: "Input Settings",
    },
    &StatusScreen,
    &PlaceholderScreen {
        label: "Commit",
        title: "Commit Settings",
    },
    &HelpScreen,
];

/// Screen shown for a menu entry
pub fn screen_for(item: MenuItem) -> &'static dyn Screen {
    SCREENS[item.index() as usize]
}
