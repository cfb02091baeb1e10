//! Settings persistence.

use crate::backend::KeyValueStore;
use crate::error::StorageError;
use leytext_core::Settings;
use std::sync::Arc;

/// Storage key holding the settings object.
pub const SETTINGS_KEY: &str = "settings";

/// Reads and writes [`Settings`] through a key-value backend.
pub struct SettingsStore<K> {
    backend: Arc<K>,
}

impl<K: KeyValueStore> SettingsStore<K> {
    pub fn new(backend: Arc<K>) -> Self {
        Self { backend }
    }

    /// Stored settings, or the defaults when missing or unreadable.
    pub async fn load(&self) -> Settings {
        match self.backend.get_item(SETTINGS_KEY).await {
            Ok(Some(payload)) => serde_json::from_str(&payload).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable settings: {}", e);
                Settings::default()
            }),
            Ok(None) => Settings::default(),
            Err(e) => {
                tracing::warn!("Failed to read settings, using defaults: {}", e);
                Settings::default()
            }
        }
    }

    pub async fn save(&self, settings: &Settings) -> Result<(), StorageError> {
        let payload = serde_json::to_string(settings)?;
        self.backend.set_item(SETTINGS_KEY, payload).await
    }
}
