//! Application settings.

use crate::quiz::QuizConfig;
use crate::types::{Category, LanguagePair, WordDraft};
use serde::{Deserialize, Serialize};

/// Storage key holding the word list.
pub const DEFAULT_WORDS_KEY: &str = "words";

/// Global settings configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub words_key: String,
    pub quiz: QuizConfig,
    /// Language pair preselected in the word form and used for flashcards.
    pub default_languages: LanguagePair,
    pub default_category: Category,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            words_key: DEFAULT_WORDS_KEY.to_string(),
            quiz: QuizConfig::default(),
            default_languages: LanguagePair::default(),
            default_category: Category::default(),
        }
    }
}

impl Settings {
    /// Draft preselected with the default category and language pair.
    pub fn draft(&self, word: impl Into<String>, meaning: impl Into<String>) -> WordDraft {
        WordDraft::new(word, meaning)
            .with_category(self.default_category)
            .with_languages(self.default_languages)
    }
}
