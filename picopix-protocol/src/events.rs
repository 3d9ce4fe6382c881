//! UI events decoded from operator keystrokes

/// Discrete console commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiEvent {
    /// Up arrow
    MoveSelectionUp,
    /// Down arrow
    MoveSelectionDown,
    /// Tab: swap focus between menu and inner screen
    ToggleFocus,
    /// `r` / `R`: repaint everything
    ForceRedraw,
    /// `p` / `P`: freeze or resume the effect
    TogglePause,
    /// `s` / `S`: start or stop the LED output
    ToggleRun,
    /// Any other single byte
    Unrecognized,
}

// Wire format values
pub const KEY_TAB: u8 = b'\t';
pub const KEY_ESCAPE: u8 = 0x1b;
pub const CSI_BRACKET: u8 = b'[';
pub const CSI_UP: u8 = b'A';
pub const CSI_DOWN: u8 = b'B';

impl UiEvent {
    /// Map a single keystroke that is not part of an escape sequence
    pub fn from_key(byte: u8) -> Self {
        match byte {
            KEY_TAB => UiEvent::ToggleFocus,
            b'r' | b'R' => UiEvent::ForceRedraw,
            b'p' | b'P' => UiEvent::TogglePause,
            b's' | b'S' => UiEvent::ToggleRun,
            _ => UiEvent::Unrecognized,
        }
    }

    /// Map the final byte of a CSI sequence
    pub fn from_csi_final(byte: u8) -> Option<Self> {
        match byte {
            CSI_UP => Some(UiEvent::MoveSelectionUp),
            CSI_DOWN => Some(UiEvent::MoveSelectionDown),
            _ => None,
        }
    }

    /// Returns true if this event moves the menu selection
    pub fn is_navigation(&self) -> bool {
        matches!(self, UiEvent::MoveSelectionUp | UiEvent::MoveSelectionDown)
    }

    /// Returns true if this event acts on the lighting side rather than the screen
    pub fn is_device_command(&self) -> bool {
        matches!(self, UiEvent::TogglePause | UiEvent::ToggleRun)
    }
}
