//! Console navigation state
//!
//! Tracks which menu item is selected and which pane has keyboard focus,
//! and records which screen regions need repainting.

pub mod dirty;
pub mod events;
pub mod machine;

pub use dirty::{DirtySet, Region};
pub use events::UiEvent;
pub use machine::{Command, Focus, MenuItem, NavState, MENU_ITEMS};
