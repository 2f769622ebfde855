use std::sync::Arc;

use crate::{
    models::Theme,
    storage::{KeyValueStore, StorageError, THEME_KEY},
};

/// User preferences kept next to the cart in the same key-value storage.
#[derive(Debug, Clone)]
pub struct Preferences {
    storage: Arc<dyn KeyValueStore>,
}

impl Preferences {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Stored theme, or light when nothing usable is stored.
    pub fn theme(&self) -> Theme {
        match self.storage.get(THEME_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|err: String| {
                tracing::warn!(error = %err, "ignoring stored theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                tracing::warn!(error = %err, "theme could not be read");
                Theme::default()
            }
        }
    }

    pub fn set_theme(&self, theme: Theme) -> Result<(), StorageError> {
        self.storage.set(THEME_KEY, theme.as_str())
    }

    pub fn toggle_theme(&self) -> Result<Theme, StorageError> {
        let theme = self.theme().toggled();
        self.set_theme(theme)?;
        Ok(theme)
    }
}
