//! Filtered views over the word list.

use crate::types::{Category, LanguagePair, Record};
use serde::{Deserialize, Serialize};

/// Category selection in the word list, `All` or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a picker value; `All` selects every category.
    pub fn parse(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        Category::parse(s).map(Self::Only)
    }

    pub fn matches(&self, category: Option<Category>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => category == Some(*wanted),
        }
    }
}

/// Predicate over records. The default filter matches everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WordFilter {
    pub category: CategoryFilter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<LanguagePair>,
}

impl WordFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_category(category: Category) -> Self {
        Self::all().with_category(CategoryFilter::Only(category))
    }

    pub fn by_language_pair(pair: LanguagePair) -> Self {
        Self::all().with_language_pair(pair)
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_language_pair(mut self, pair: LanguagePair) -> Self {
        self.languages = Some(pair);
        self
    }

    /// A language-pair filter only matches records with both languages set.
    pub fn matches(&self, record: &Record) -> bool {
        if !self.category.matches(record.category) {
            return false;
        }
        match self.languages {
            Some(pair) => record.language_pair() == Some(pair),
            None => true,
        }
    }

    /// Clone out the matching records, keeping their order.
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}
