//! Error types for leytext-core.

use thiserror::Error;

/// A word draft that cannot be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("word must not be empty")]
    EmptyWord,

    #[error("meaning must not be empty")]
    EmptyMeaning,
}

impl ValidationError {
    /// Message shown to the user when a save is rejected.
    pub fn user_message(&self) -> &'static str {
        "Please enter both word and meaning."
    }
}

/// A flashcard deck or quiz was asked for more words than it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmptySequenceError {
    #[error("no flashcards available")]
    NoCards,

    #[error("quiz needs at least {required} words, found {available}")]
    NotEnoughWords { required: usize, available: usize },

    #[error("quiz needs {required} distractors, found {available}")]
    NotEnoughDistractors { required: usize, available: usize },
}

impl EmptySequenceError {
    /// Message shown to the user in place of the card or question.
    pub fn user_message(&self) -> String {
        match self {
            Self::NoCards => "No flashcards available. Please add words first.".to_string(),
            Self::NotEnoughWords { required, .. } => {
                format!("Add at least {required} words to use the quiz.")
            }
            Self::NotEnoughDistractors { .. } => {
                "Add more words with different meanings to use the quiz.".to_string()
            }
        }
    }
}

/// Errors from answering a quiz round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("question already answered")]
    AlreadyAnswered,

    #[error("choice {index} out of range for {len} choices")]
    ChoiceOutOfRange { index: usize, len: usize },
}
