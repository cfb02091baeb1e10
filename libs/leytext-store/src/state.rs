//! Application state.

use crate::backend::{default_data_dir, KeyValueStore, SqliteStore};
use crate::error::StorageError;
use crate::persistence::ScopedJsonAdapter;
use crate::settings::SettingsStore;
use crate::store::WordStore;
use leytext_core::{
    generate_question, EmptySequenceError, Flashcards, Question, Settings, WordDraft, WordFilter,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Database file inside the data directory.
pub fn default_db_path() -> PathBuf {
    default_data_dir().join("leytext.db")
}

/// Everything a screen talks to: the word store and the settings.
pub struct AppState<K> {
    pub words: WordStore<ScopedJsonAdapter<K>>,
    settings_store: SettingsStore<K>,
    settings: RwLock<Settings>,
}

impl AppState<SqliteStore> {
    /// Open the on-device database, creating the data directory if needed.
    pub async fn open_default() -> Result<Self, StorageError> {
        let db_path = default_db_path();
        if let Some(parent) = db_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tracing::info!("Opening word database at {}", db_path.display());
        let backend = SqliteStore::open(&db_path)?;
        Ok(Self::open(backend).await)
    }
}

impl<K: KeyValueStore> AppState<K> {
    /// Load settings, then the word list under the configured key.
    pub async fn open(backend: K) -> Self {
        let backend = Arc::new(backend);
        let settings_store = SettingsStore::new(Arc::clone(&backend));
        let settings = settings_store.load().await;
        let adapter = ScopedJsonAdapter::new(backend, settings.words_key.clone());
        Self {
            words: WordStore::open(adapter).await,
            settings_store,
            settings: RwLock::new(settings),
        }
    }

    pub async fn settings(&self) -> Settings {
        self.settings.read().await.clone()
    }

    /// Persist new settings. A changed `words_key` applies on the next open.
    pub async fn save_settings(&self, settings: Settings) -> Result<(), StorageError> {
        let mut current = self.settings.write().await;
        self.settings_store.save(&settings).await?;
        *current = settings;
        Ok(())
    }

    /// Draft for the add-word form, preselected from the settings.
    pub async fn new_draft(
        &self,
        word: impl Into<String>,
        meaning: impl Into<String>,
    ) -> WordDraft {
        self.settings.read().await.draft(word, meaning)
    }

    /// Fresh flashcard deck over the words matching `filter`.
    pub async fn flashcards(&self, filter: &WordFilter) -> Flashcards {
        Flashcards::new(self.words.list(Some(filter)).await)
    }

    /// Flashcards for the configured default language pair.
    pub async fn default_flashcards(&self) -> Flashcards {
        let pair = self.settings.read().await.default_languages;
        self.flashcards(&WordFilter::by_language_pair(pair)).await
    }

    /// Next quiz question over the whole word list.
    pub async fn next_question(&self) -> Result<Question, EmptySequenceError> {
        let config = self.settings.read().await.quiz;
        let words = self.words.list(None).await;
        generate_question(&words, &config)
    }
}
