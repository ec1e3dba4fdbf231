//! Persisted light/dark theme preference.

use billease_core::Theme;
use tracing::instrument;

use crate::config::StorageConfig;
use crate::error::Result;
use crate::storage::KeyValueStore;

/// Storage key for the theme.
pub const THEME_KEY: &str = "billeasy_theme";

/// Reads and toggles the theme stored under [`THEME_KEY`].
///
/// The value is the bare string `"light"` or `"dark"`. A missing or
/// unrecognised value means light.
#[derive(Debug, Clone)]
pub struct ThemePreference<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> ThemePreference<S> {
    /// Preference stored under the default key.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            key: THEME_KEY.to_owned(),
        }
    }

    /// Preference stored under the theme key from `config`.
    pub fn with_config(storage: S, config: &StorageConfig) -> Self {
        Self {
            storage,
            key: config.theme_key.clone(),
        }
    }

    /// The saved theme, light if nothing valid is saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend cannot be read.
    pub fn current(&self) -> Result<Theme> {
        let stored = self.storage.get(&self.key)?;
        Ok(match stored.as_deref() {
            None => Theme::default(),
            Some(value) => Theme::from_stored(value).unwrap_or_else(|| {
                tracing::warn!(value, "Ignoring unrecognised theme value");
                Theme::default()
            }),
        })
    }

    /// Save `theme`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend cannot be written.
    pub fn set(&self, theme: Theme) -> Result<()> {
        self.storage.set(&self.key, theme.as_str())?;
        Ok(())
    }

    /// Switch to the other theme, save it and return it.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend fails.
    #[instrument(skip(self))]
    pub fn toggle(&self) -> Result<Theme> {
        let next = self.current()?.toggled();
        self.set(next)?;
        tracing::info!(theme = %next, "Theme toggled");
        Ok(next)
    }
}
