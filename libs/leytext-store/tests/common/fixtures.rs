//! Test fixtures and factory functions for creating test data.

use leytext_core::{Category, Language, LanguagePair, WordDraft};

/// English to Waray-Waray greeting.
pub fn greeting() -> WordDraft {
    WordDraft::new("Good morning", "Maupay nga aga")
        .with_category(Category::Greetings)
        .with_languages(LanguagePair::new(Language::English, Language::WarayWaray))
}

/// Bisaya to English greeting.
pub fn bisaya_greeting() -> WordDraft {
    WordDraft::new("Maayong buntag", "Good morning")
        .with_languages(LanguagePair::new(Language::Bisaya, Language::English))
}

/// `count` English to Waray-Waray words with distinct meanings.
pub fn numbered_words(count: usize) -> Vec<WordDraft> {
    (0..count)
        .map(|i| {
            WordDraft::new(format!("Word {}", i + 1), format!("Meaning {}", i + 1))
                .with_category(Category::Numbers)
                .with_languages(LanguagePair::default())
        })
        .collect()
}

/// Payload written by the old add-word form.
pub fn legacy_payload() -> &'static str {
    r#"[
        {"fromLang":"English","toLang":"Waray","word":"Water","meaning":"Tubig","example":"","pronunciation":""},
        {"word":"Fish","meaning":"Isda","category":"Food","sourceLang":"English","targetLang":"Waray-Waray"}
    ]"#
}
