//! JSON encoding of the word list.
//!
//! Older payloads name the language fields `fromLang`/`toLang`, lack ids, or
//! carry blank and free-text values. Decoding accepts all of them and reports
//! whether the result differs from what was stored.

use leytext_core::{Category, Language, Record, WordDraft};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use uuid::Uuid;

/// Namespace for ids assigned to stored words that lack a usable one.
const ASSIGNED_ID_NAMESPACE: Uuid = Uuid::from_u128(0x6c65_7974_6578_7400_8000_0000_0000_0001);

/// Words decoded from a stored payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub records: Vec<Record>,
    /// The canonical encoding of `records` differs from the stored payload.
    pub normalized: bool,
}

/// Any shape a word has been stored in.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StoredWord {
    id: Option<String>,
    word: Option<String>,
    meaning: Option<String>,
    example: Option<String>,
    pronunciation: Option<String>,
    category: Option<String>,
    source_lang: Option<String>,
    target_lang: Option<String>,
    from_lang: Option<String>,
    to_lang: Option<String>,
}

pub fn encode(records: &[Record]) -> serde_json::Result<String> {
    serde_json::to_string(records)
}

/// Decode a stored payload.
///
/// Fails only when the payload is not a JSON array. Entries that cannot be
/// turned into a valid record are dropped with a warning.
pub fn decode(payload: &str) -> Result<Decoded, String> {
    if payload.trim().is_empty() {
        return Ok(Decoded {
            records: Vec::new(),
            normalized: false,
        });
    }

    let stored: Value = serde_json::from_str(payload).map_err(|e| e.to_string())?;
    let Value::Array(items) = &stored else {
        return Err("expected a JSON array of words".to_string());
    };

    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        let word = match StoredWord::deserialize(item) {
            Ok(word) => word,
            Err(e) => {
                tracing::warn!("Dropping unreadable word at {}: {}", position, e);
                continue;
            }
        };
        match word.into_record(position, &mut seen) {
            Some(record) => records.push(record),
            None => tracing::warn!("Dropping word at {} with empty word or meaning", position),
        }
    }

    let normalized = serde_json::to_value(&records).map_or(true, |canonical| canonical != stored);
    Ok(Decoded {
        records,
        normalized,
    })
}

impl StoredWord {
    fn into_record(self, position: usize, seen: &mut HashSet<Uuid>) -> Option<Record> {
        let id = self
            .id
            .as_deref()
            .and_then(|s| Uuid::parse_str(s).ok())
            .filter(|id| !seen.contains(id))
            .unwrap_or_else(|| self.assigned_id(position, seen));
        seen.insert(id);

        let source = first_present(self.source_lang, self.from_lang);
        let target = first_present(self.target_lang, self.to_lang);
        let draft = WordDraft {
            word: self.word.unwrap_or_default(),
            meaning: self.meaning.unwrap_or_default(),
            example: self.example,
            pronunciation: self.pronunciation,
            category: self.category.as_deref().and_then(lenient_category),
            source_lang: source.as_deref().and_then(lenient_language),
            target_lang: target.as_deref().and_then(lenient_language),
        };
        Record::with_id(id, draft).ok()
    }

    /// Id for an entry whose stored id is missing, malformed or taken.
    ///
    /// Derived from the entry itself, so the same payload decodes to the same
    /// ids until it has been rewritten.
    fn assigned_id(&self, position: usize, seen: &HashSet<Uuid>) -> Uuid {
        let word = self.word.as_deref().unwrap_or_default();
        let meaning = self.meaning.as_deref().unwrap_or_default();
        (0u32..)
            .map(|attempt| {
                let name = format!("{position}\u{0}{attempt}\u{0}{word}\u{0}{meaning}");
                Uuid::new_v5(&ASSIGNED_ID_NAMESPACE, name.as_bytes())
            })
            .find(|id| !seen.contains(id))
            .unwrap_or_else(Uuid::new_v4)
    }
}

fn first_present(canonical: Option<String>, legacy: Option<String>) -> Option<String> {
    canonical
        .filter(|s| !s.trim().is_empty())
        .or(legacy.filter(|s| !s.trim().is_empty()))
}

fn lenient_language(s: &str) -> Option<Language> {
    let language = Language::parse(s);
    if language.is_none() {
        tracing::warn!("Unknown language {:?}, leaving unset", s);
    }
    language
}

fn lenient_category(s: &str) -> Option<Category> {
    if s.trim().is_empty() {
        return None;
    }
    let category = Category::parse(s);
    if category.is_none() {
        tracing::warn!("Unknown category {:?}, leaving unset", s);
    }
    category
}
