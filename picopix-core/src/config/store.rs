//! Settings persistence capability
//!
//! Nothing is written to flash yet: the shipped store is inert, so every
//! boot starts from defaults.

use super::types::Settings;

/// Where settings live between power cycles
pub trait SettingsStore {
    /// Fetch stored settings, if there are any usable ones
    fn load(&mut self) -> Option<Settings>;

    /// Persist settings
    fn save(&mut self, settings: &Settings);
}

/// Store that holds nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct InertStore;

impl SettingsStore for InertStore {
    fn load(&mut self) -> Option<Settings> {
        None
    }

    fn save(&mut self, _settings: &Settings) {}
}

/// Load settings, falling back to defaults
///
/// The run flag is always cleared on the way out.
pub fn load_or_default<S: SettingsStore + ?Sized>(store: &mut S) -> Settings {
    let mut settings = store.load().unwrap_or_default();
    settings.set_running(false);
    settings
}
