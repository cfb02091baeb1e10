//! Application state wiring: settings, flashcards and quiz over stored words.

mod common;

use std::sync::Arc;

use leytext_core::{
    Category, EmptySequenceError, Language, LanguagePair, QuizRound, Settings, WordDraft,
    WordFilter,
};
use leytext_store::{
    AppState, FileStore, KeyValueStore, MemoryStore, PersistenceAdapter, ScopedJsonAdapter,
    SqliteStore, SETTINGS_KEY,
};
use pretty_assertions::assert_eq;

use common::fixtures;

#[tokio::test]
async fn quiz_refuses_three_words() {
    common::init_logging();
    let app = AppState::open(MemoryStore::new()).await;
    for draft in fixtures::numbered_words(3) {
        app.words.add(draft).await.unwrap();
    }

    let error = app.next_question().await.unwrap_err();
    assert_eq!(
        error,
        EmptySequenceError::NotEnoughWords {
            required: 4,
            available: 3
        }
    );
    assert_eq!(error.user_message(), "Add at least 4 words to use the quiz.");
}

#[tokio::test]
async fn quiz_question_can_be_answered() {
    common::init_logging();
    let app = AppState::open(MemoryStore::new()).await;
    for draft in fixtures::numbered_words(6) {
        app.words.add(draft).await.unwrap();
    }

    let question = app.next_question().await.unwrap();
    assert_eq!(question.choices.len(), 4);
    let answer = question.answer_index().unwrap();

    let mut round = QuizRound::new(question);
    assert_eq!(round.select(answer), Ok(true));
}

#[tokio::test]
async fn default_flashcards_use_default_pair() {
    common::init_logging();
    let app = AppState::open(MemoryStore::new()).await;
    app.words.add(fixtures::bisaya_greeting()).await.unwrap();
    app.words.add(fixtures::greeting()).await.unwrap();

    let mut cards = app.default_flashcards().await;
    assert_eq!(cards.len(), 1);
    assert_eq!(cards.current().unwrap().word, "Good morning");
    cards.advance().unwrap();
    assert_eq!(cards.position(), 0);
}

#[tokio::test]
async fn empty_filter_yields_empty_deck() {
    common::init_logging();
    let app = AppState::open(MemoryStore::new()).await;
    app.words.add(fixtures::bisaya_greeting()).await.unwrap();

    let filter = WordFilter::by_language_pair(LanguagePair::new(
        Language::Tagalog,
        Language::English,
    ));
    let cards = app.flashcards(&filter).await;
    assert_eq!(cards.current(), Err(EmptySequenceError::NoCards));
}

#[tokio::test]
async fn saved_settings_survive_reopen() {
    common::init_logging();
    let dir = tempfile::tempdir().unwrap();
    let mut settings = Settings::default();
    settings.default_languages = LanguagePair::new(Language::Tagalog, Language::English);
    settings.quiz.min_words = 5;

    {
        let app = AppState::open(FileStore::new(dir.path())).await;
        app.save_settings(settings.clone()).await.unwrap();
    }

    let app = AppState::open(FileStore::new(dir.path())).await;
    assert_eq!(app.settings().await, settings);
    assert!(dir.path().join(format!("{SETTINGS_KEY}.json")).exists());
}

#[tokio::test]
async fn new_draft_follows_saved_defaults() {
    common::init_logging();
    let app = AppState::open(MemoryStore::new()).await;
    let mut settings = app.settings().await;
    settings.default_category = Category::Food;
    settings.default_languages = LanguagePair::new(Language::Bisaya, Language::English);
    app.save_settings(settings).await.unwrap();

    let draft = app.new_draft("Kan-on", "Rice").await;
    let added = app.words.add(draft).await.unwrap();
    assert_eq!(added.category, Some(Category::Food));
    assert_eq!(
        added.language_pair(),
        Some(LanguagePair::new(Language::Bisaya, Language::English))
    );

    let food = WordFilter::by_category(Category::Food);
    assert_eq!(app.flashcards(&food).await.len(), 1);
}

#[tokio::test]
async fn words_key_comes_from_settings() {
    common::init_logging();
    let backend = MemoryStore::new();
    let mut settings = Settings::default();
    settings.words_key = "waray_words".to_string();
    backend
        .set_item(SETTINGS_KEY, serde_json::to_string(&settings).unwrap())
        .await
        .unwrap();

    let app = AppState::open(backend).await;
    app.words.add(fixtures::greeting()).await.unwrap();
    assert_eq!(app.words.adapter().key(), "waray_words");
    assert!(app.words.adapter().backend().get_item("waray_words").await.unwrap().is_some());
    assert!(app.words.adapter().backend().get_item("words").await.unwrap().is_none());
}

#[tokio::test]
async fn sqlite_round_trip() {
    common::init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leytext.db");

    let saved = {
        let app = AppState::open(SqliteStore::open(&path).unwrap()).await;
        app.words.add(fixtures::greeting()).await.unwrap();
        app.words
            .add(WordDraft::new("Salamat", "Thank you").with_pronunciation("sah-LAH-maht"))
            .await
            .unwrap();
        app.words.list(None).await
    };

    let adapter = ScopedJsonAdapter::new(Arc::new(SqliteStore::open(&path).unwrap()), "words");
    assert_eq!(adapter.load().await.unwrap(), saved);
}

#[tokio::test]
async fn file_round_trip() {
    common::init_logging();
    let dir = tempfile::tempdir().unwrap();
    let adapter = ScopedJsonAdapter::new(Arc::new(FileStore::new(dir.path())), "words");
    let records: Vec<_> = fixtures::numbered_words(5)
        .into_iter()
        .map(|d| leytext_core::Record::create(d).unwrap())
        .collect();

    adapter.save(&records).await.unwrap();
    assert_eq!(adapter.load().await.unwrap(), records);
}
