//! Multiple-choice quiz generation.
//!
//! A question picks one record at random and asks for its meaning. The other
//! choices are distractors drawn from records with a different meaning.

use crate::error::{AnswerError, EmptySequenceError};
use crate::types::Record;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fewest words the quiz will run with.
pub const MIN_QUIZ_WORDS: usize = 4;

/// Choices shown per question, the correct one included.
pub const CHOICES_PER_QUESTION: usize = 4;

/// Quiz generation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub min_words: usize,
    pub choice_count: usize,
    /// Also skip distractors whose word text equals the question's word.
    pub exclude_duplicate_words: bool,
    /// Accept questions with fewer choices when distractors run out.
    pub allow_short_choice_sets: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            min_words: MIN_QUIZ_WORDS,
            choice_count: CHOICES_PER_QUESTION,
            exclude_duplicate_words: false,
            allow_short_choice_sets: true,
        }
    }
}

/// One generated question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: Record,
    /// Between 1 and `choice_count` records, in random order.
    pub choices: Vec<Record>,
}

impl Question {
    /// Answers are compared by meaning text, not by record identity.
    pub fn is_correct(&self, choice: &Record) -> bool {
        check_answer(self, choice)
    }

    /// Position of the question record among the choices.
    pub fn answer_index(&self) -> Option<usize> {
        self.choices.iter().position(|c| c.id == self.question.id)
    }
}

/// Whether `choice` answers `question`.
pub fn check_answer(question: &Question, choice: &Record) -> bool {
    choice.meaning == question.question.meaning
}

/// Generate a question with the thread-local RNG.
pub fn generate_question(
    records: &[Record],
    config: &QuizConfig,
) -> Result<Question, EmptySequenceError> {
    generate(records, config, &mut rand::thread_rng())
}

/// Generate a question from `records`.
///
/// Fails instead of degrading when there are fewer than `config.min_words`
/// records.
pub fn generate<R: Rng + ?Sized>(
    records: &[Record],
    config: &QuizConfig,
    rng: &mut R,
) -> Result<Question, EmptySequenceError> {
    let not_enough = EmptySequenceError::NotEnoughWords {
        required: config.min_words.max(1),
        available: records.len(),
    };
    if records.len() < config.min_words {
        return Err(not_enough);
    }
    let correct = records.choose(rng).ok_or(not_enough)?;

    let mut eligible: Vec<&Record> = records
        .iter()
        .filter(|r| r.meaning != correct.meaning)
        .filter(|r| !(config.exclude_duplicate_words && r.word == correct.word))
        .collect();

    let wanted = config.choice_count.saturating_sub(1);
    if eligible.len() < wanted && !config.allow_short_choice_sets {
        return Err(EmptySequenceError::NotEnoughDistractors {
            required: wanted,
            available: eligible.len(),
        });
    }

    let (distractors, _) = eligible.partial_shuffle(rng, wanted);
    let mut choices: Vec<Record> = distractors.iter().map(|r| (*r).clone()).collect();
    choices.push(correct.clone());
    choices.shuffle(rng);

    Ok(Question {
        question: correct.clone(),
        choices,
    })
}

/// How a choice should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceStatus {
    /// Not answered yet.
    Pending,
    Correct,
    /// The wrong choice the user picked.
    Wrong,
    Neutral,
}

/// A question on screen and the single answer given to it.
#[derive(Debug, Clone)]
pub struct QuizRound {
    question: Question,
    selected: Option<usize>,
}

impl QuizRound {
    pub fn new(question: Question) -> Self {
        Self {
            question,
            selected: None,
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    /// Lock in a choice and report whether it was right.
    pub fn select(&mut self, index: usize) -> Result<bool, AnswerError> {
        if self.selected.is_some() {
            return Err(AnswerError::AlreadyAnswered);
        }
        let choice = self
            .question
            .choices
            .get(index)
            .ok_or(AnswerError::ChoiceOutOfRange {
                index,
                len: self.question.choices.len(),
            })?;
        let correct = self.question.is_correct(choice);
        self.selected = Some(index);
        Ok(correct)
    }

    /// Whether the locked-in answer was right.
    pub fn was_correct(&self) -> Option<bool> {
        let choice = self.question.choices.get(self.selected?)?;
        Some(self.question.is_correct(choice))
    }

    pub fn choice_status(&self, index: usize) -> ChoiceStatus {
        let Some(selected) = self.selected else {
            return ChoiceStatus::Pending;
        };
        match self.question.choices.get(index) {
            Some(choice) if self.question.is_correct(choice) => ChoiceStatus::Correct,
            Some(_) if index == selected => ChoiceStatus::Wrong,
            _ => ChoiceStatus::Neutral,
        }
    }
}
