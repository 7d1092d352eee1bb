//! Light/dark state with persistence.

use super::{ambient::AmbientScheme, store::PreferenceStore};

pub const THEME_KEY: &str = "darkMode";

/// The global marker every styled element keys off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn is_dark(self) -> bool {
        matches!(self, Appearance::Dark)
    }
}

impl From<bool> for Appearance {
    fn from(dark: bool) -> Self {
        if dark { Appearance::Dark } else { Appearance::Light }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeController {
    dark: bool,
}

impl ThemeController {
    /// Resolves the starting state: stored value, then ambient signal, then
    /// light. Storage errors degrade to light and are never surfaced.
    pub fn initialize(store: &dyn PreferenceStore, ambient: &dyn AmbientScheme) -> Self {
        let dark = match store.get(THEME_KEY) {
            Ok(Some(value)) => {
                tracing::debug!(value = %value, "using persisted theme preference");
                value == "true"
            }
            Ok(None) => {
                let ambient = ambient.prefers_dark();
                tracing::debug!(?ambient, "no persisted theme preference");
                ambient.unwrap_or(false)
            }
            Err(e) => {
                tracing::warn!(error = %e, "theme preference unreadable, defaulting to light");
                false
            }
        };
        Self { dark }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn appearance(&self) -> Appearance {
        Appearance::from(self.dark)
    }

    /// Flips the state and persists it. Returns the new value.
    pub fn toggle(&mut self, store: &mut dyn PreferenceStore) -> bool {
        self.dark = !self.dark;
        let value = if self.dark { "true" } else { "false" };
        if let Err(e) = store.set(THEME_KEY, value) {
            tracing::warn!(error = %e, "failed to persist theme preference");
        }
        tracing::info!(dark = self.dark, "theme toggled");
        self.dark
    }

    /// Label for the toggle control, describing what pressing it does.
    pub fn toggle_label(&self) -> &'static str {
        if self.dark {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    }
}

/// The persisted preference as shown to the user: the raw value, `none`, or
/// the read error.
pub fn describe_stored(store: &dyn PreferenceStore) -> String {
    match store.get(THEME_KEY) {
        Ok(Some(value)) => value,
        Ok(None) => "none".to_string(),
        Err(e) => format!("unreadable ({})", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ambient::FixedScheme, store::MemoryPreferenceStore};

    #[test]
    fn non_true_values_mean_light() {
        let store = MemoryPreferenceStore::new().with_entry(THEME_KEY, "yes");
        let theme = ThemeController::initialize(&store, &FixedScheme(Some(true)));
        assert!(!theme.is_dark());
    }

    #[test]
    fn initialize_does_not_write() {
        let store = MemoryPreferenceStore::new();
        let _ = ThemeController::initialize(&store, &FixedScheme(Some(true)));
        assert_eq!(store.get(THEME_KEY).unwrap(), None);
    }

    #[test]
    fn label_follows_state() {
        let mut store = MemoryPreferenceStore::new();
        let mut theme = ThemeController::default();
        assert_eq!(theme.toggle_label(), "Switch to dark mode");
        theme.toggle(&mut store);
        assert_eq!(theme.toggle_label(), "Switch to light mode");
        assert_eq!(theme.appearance(), Appearance::Dark);
    }
}
