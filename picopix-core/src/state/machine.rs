//! Navigation state machine
//!
//! The console is a function of the selected menu item, which pane has
//! focus, and an event. Screen changes are reported through the dirty set;
//! lighting side effects are returned as [`Command`]s for the caller to run.

use super::dirty::{DirtySet, Region};
use super::events::UiEvent;

/// Number of menu entries
pub const MENU_ITEMS: u8 = 6;

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Focus {
    /// Arrow keys move the menu selection
    #[default]
    Menu,
    /// Arrow keys belong to the inner screen
    Screen,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Menu => Focus::Screen,
            Focus::Screen => Focus::Menu,
        }
    }
}

/// Menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuItem {
    Config,
    Effect,
    Inputs,
    Status,
    Commit,
    Help,
}

impl MenuItem {
    /// All entries in display order
    pub const ALL: [MenuItem; MENU_ITEMS as usize] = [
        MenuItem::Config,
        MenuItem::Effect,
        MenuItem::Inputs,
        MenuItem::Status,
        MenuItem::Commit,
        MenuItem::Help,
    ];

    /// Entry at a menu index, wrapping out-of-range indices
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index % MENU_ITEMS) as usize]
    }

    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Side effects requested by an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Freeze or resume the effect
    TogglePause,
    /// Start or stop the LED output
    ToggleRun,
}

/// Console navigation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NavState {
    selection: u8,
    focus: Focus,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavState {
    /// Boot state: first item selected, menu focused
    pub const fn new() -> Self {
        Self {
            selection: 0,
            focus: Focus::Menu,
        }
    }

    /// Selected menu index, always below [`MENU_ITEMS`]
    pub fn selection(&self) -> u8 {
        self.selection
    }

    pub fn selected_item(&self) -> MenuItem {
        MenuItem::from_index(self.selection)
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Process an event
    ///
    /// Marks the regions the event invalidates and returns any command the
    /// caller must carry out.
    pub fn handle(&mut self, event: UiEvent, dirty: &mut DirtySet) -> Option<Command> {
        use UiEvent::*;

        match (self.focus, event) {
            (_, ToggleFocus) => {
                self.focus = self.focus.toggled();
                dirty.mark_dirty(Region::MenuFrame);
                None
            }

            (Focus::Menu, MoveSelectionUp) => {
                self.selection = (self.selection + MENU_ITEMS - 1) % MENU_ITEMS;
                dirty.mark_dirty(Region::MenuScreen);
                dirty.mark_dirty(Region::MenuChoice);
                None
            }
            (Focus::Menu, MoveSelectionDown) => {
                self.selection = (self.selection + 1) % MENU_ITEMS;
                dirty.mark_dirty(Region::MenuScreen);
                dirty.mark_dirty(Region::MenuChoice);
                None
            }
            // Reserved for per-screen navigation
            (Focus::Screen, MoveSelectionUp | MoveSelectionDown) => None,

            (_, ForceRedraw) => {
                dirty.mark_all();
                None
            }

            (_, TogglePause) => Some(Command::TogglePause),
            (_, ToggleRun) => Some(Command::ToggleRun),

            (_, Unrecognized) => None,
        }
    }
}
