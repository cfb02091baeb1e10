//! Core vocabulary library for LeyText.
//!
//! Provides:
//! - Word records, drafts and validation
//! - Category and language-pair filters
//! - Multiple-choice quiz generation
//! - Flashcard sequencing
//! - Shared settings and error types

pub mod error;
pub mod filter;
pub mod flashcards;
pub mod quiz;
pub mod settings;
pub mod types;

pub use error::{AnswerError, EmptySequenceError, ValidationError};
pub use filter::{CategoryFilter, WordFilter};
pub use flashcards::{CardFace, Flashcards};
pub use quiz::{
    check_answer, generate, generate_question, ChoiceStatus, Question, QuizConfig, QuizRound,
};
pub use settings::Settings;
pub use types::{Category, Language, LanguagePair, Record, WordDraft};
