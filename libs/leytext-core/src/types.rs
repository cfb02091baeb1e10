//! Core types for the vocabulary store.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Languages a word can be learned from or into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Tagalog,
    Bisaya,
    #[serde(rename = "Waray-Waray")]
    WarayWaray,
}

impl Language {
    /// Every language, in picker order.
    pub const ALL: [Language; 4] = [
        Self::English,
        Self::Tagalog,
        Self::Bisaya,
        Self::WarayWaray,
    ];

    /// Display name, also the persisted value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Tagalog => "Tagalog",
            Self::Bisaya => "Bisaya",
            Self::WarayWaray => "Waray-Waray",
        }
    }

    /// Parse a language name typed or stored by hand.
    ///
    /// Case-insensitive; `Waray` is accepted for Waray-Waray.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "english" => Some(Self::English),
            "tagalog" => Some(Self::Tagalog),
            "bisaya" => Some(Self::Bisaya),
            "waray-waray" | "waray waray" | "waray" => Some(Self::WarayWaray),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Topic a word belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Greetings,
    Food,
    Travel,
    Numbers,
    Market,
}

impl Default for Category {
    fn default() -> Self {
        Self::Greetings
    }
}

impl Category {
    /// Every category, in picker order.
    pub const ALL: [Category; 5] = [
        Self::Greetings,
        Self::Food,
        Self::Travel,
        Self::Numbers,
        Self::Market,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greetings => "Greetings",
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Numbers => "Numbers",
            Self::Market => "Market",
        }
    }

    /// Parse a category name, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source and target language of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguagePair {
    pub source: Language,
    pub target: Language,
}

impl LanguagePair {
    pub fn new(source: Language, target: Language) -> Self {
        Self { source, target }
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self {
            source: Language::English,
            target: Language::WarayWaray,
        }
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ➜ {}", self.source, self.target)
    }
}

/// Candidate word submitted for add or update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordDraft {
    pub word: String,
    pub meaning: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub pronunciation: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub source_lang: Option<Language>,
    #[serde(default)]
    pub target_lang: Option<Language>,
}

impl WordDraft {
    pub fn new(word: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            meaning: meaning.into(),
            ..Default::default()
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = non_blank(Some(example.into()));
        self
    }

    pub fn with_pronunciation(mut self, pronunciation: impl Into<String>) -> Self {
        self.pronunciation = non_blank(Some(pronunciation.into()));
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_languages(mut self, pair: LanguagePair) -> Self {
        self.source_lang = Some(pair.source);
        self.target_lang = Some(pair.target);
        self
    }

    /// Check the required fields. Only an empty string is rejected.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.word.is_empty() {
            return Err(ValidationError::EmptyWord);
        }
        if self.meaning.is_empty() {
            return Err(ValidationError::EmptyMeaning);
        }
        Ok(())
    }
}

/// A stored vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: Uuid,
    pub word: String,
    pub meaning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_lang: Option<Language>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_lang: Option<Language>,
}

impl Record {
    /// Build a record from a validated draft under a fresh id.
    pub fn create(draft: WordDraft) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), draft)
    }

    /// Build a record from a draft, keeping an existing id.
    ///
    /// Blank optional fields are stored as unset.
    pub fn with_id(id: Uuid, draft: WordDraft) -> Result<Self, ValidationError> {
        draft.validate()?;
        Ok(Self {
            id,
            word: draft.word,
            meaning: draft.meaning,
            example: non_blank(draft.example),
            pronunciation: non_blank(draft.pronunciation),
            category: draft.category,
            source_lang: draft.source_lang,
            target_lang: draft.target_lang,
        })
    }

    /// Language pair, if both ends are known.
    pub fn language_pair(&self) -> Option<LanguagePair> {
        Some(LanguagePair::new(self.source_lang?, self.target_lang?))
    }

    /// Draft carrying this record's fields, for pre-filling an edit form.
    pub fn to_draft(&self) -> WordDraft {
        WordDraft {
            word: self.word.clone(),
            meaning: self.meaning.clone(),
            example: self.example.clone(),
            pronunciation: self.pronunciation.clone(),
            category: self.category,
            source_lang: self.source_lang,
            target_lang: self.target_lang,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ➜ {}", self.word, self.meaning)?;
        if let Some(category) = self.category {
            write!(f, " ({category})")?;
        }
        if let Some(pair) = self.language_pair() {
            write!(f, " [{pair}]")?;
        }
        Ok(())
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
