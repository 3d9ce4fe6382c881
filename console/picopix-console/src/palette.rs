//! Console color palettes

use picopix_core::pixel::Rgb;

/// Foreground and background drawn together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorPair {
    pub fg: Rgb,
    pub bg: Rgb,
}

impl ColorPair {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self { fg, bg }
    }

    /// Same pair with foreground and background exchanged
    pub const fn swapped(self) -> Self {
        Self {
            fg: self.bg,
            bg: self.fg,
        }
    }
}

/// Unselected menu buttons; the selected one uses the swapped pair
pub const MENU_BUTTON: ColorPair = ColorPair::new(Rgb::new(64, 192, 64), Rgb::new(16, 32, 16));

/// Frame around the pane that has focus
pub const BORDER_ACTIVE: ColorPair =
    ColorPair::new(Rgb::new(255, 255, 255), Rgb::new(32, 32, 64));

/// Frame around the pane without focus
pub const BORDER_INACTIVE: ColorPair =
    ColorPair::new(Rgb::new(64, 64, 64), Rgb::new(16, 16, 32));

/// Plain text on the inner screen
pub const SCREEN_TEXT: ColorPair = ColorPair::new(Rgb::WHITE, Rgb::BLACK);

/// Outer border, drawn right after an attribute reset
pub const OUTER_BORDER: ColorPair = ColorPair::new(Rgb::new(192, 192, 192), Rgb::BLACK);

/// Classic 16-color terminal palette, used by the logo animation
pub const COLOR_4BIT: [Rgb; 16] = [
    Rgb::new(0, 0, 0),
    Rgb::new(192, 0, 0),
    Rgb::new(0, 192, 0),
    Rgb::new(192, 192, 0),
    Rgb::new(0, 0, 192),
    Rgb::new(192, 0, 192),
    Rgb::new(0, 192, 192),
    Rgb::new(192, 192, 192),
    Rgb::new(64, 64, 64),
    Rgb::new(192, 64, 64),
    Rgb::new(64, 192, 64),
    Rgb::new(192, 192, 64),
    Rgb::new(64, 64, 192),
    Rgb::new(192, 64, 192),
    Rgb::new(64, 192, 192),
    Rgb::new(192, 192, 192),
];

/// Pinout diagram colors
pub mod pinout {
    use super::ColorPair;
    use picopix_core::pixel::Rgb;

    /// Board outline and silkscreen numbers
    pub const BOARD: Rgb = Rgb::new(0, 64, 0);
    /// Label text for anything that is not the selected GPIO
    pub const LABEL_FG: Rgb = Rgb::new(192, 192, 192);

    pub const GPIO_BG: Rgb = Rgb::new(96, 96, 0);
    pub const GROUND_BG: Rgb = Rgb::new(0, 0, 0);
    pub const POWER_BG: Rgb = Rgb::new(128, 0, 0);
    pub const VREF_BG: Rgb = Rgb::new(192, 64, 0);
    pub const RUN_BG: Rgb = Rgb::new(64, 64, 64);

    /// The GPIO currently driving the strip
    pub const SELECTED: ColorPair = ColorPair::new(Rgb::new(255, 255, 255), Rgb::new(32, 192, 32));
}
