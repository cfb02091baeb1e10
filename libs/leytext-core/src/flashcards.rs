//! Flashcard sequencing over a filtered word list.

use crate::error::EmptySequenceError;
use crate::types::{Category, Record};

/// Side of the card currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace<'a> {
    Front {
        word: &'a str,
        pronunciation: Option<&'a str>,
    },
    Back {
        meaning: &'a str,
        example: Option<&'a str>,
        category: Option<Category>,
    },
}

/// Cyclic, forward-only walk over a snapshot of cards.
#[derive(Debug, Clone, Default)]
pub struct Flashcards {
    cards: Vec<Record>,
    position: usize,
    revealed: bool,
}

impl Flashcards {
    pub fn new(cards: Vec<Record>) -> Self {
        Self {
            cards,
            position: 0,
            revealed: false,
        }
    }

    /// Swap in a new snapshot and start over from the first card.
    pub fn reset(&mut self, cards: Vec<Record>) {
        self.cards = cards;
        self.position = 0;
        self.revealed = false;
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn current(&self) -> Result<&Record, EmptySequenceError> {
        self.cards
            .get(self.position)
            .ok_or(EmptySequenceError::NoCards)
    }

    /// Move to the next card, wrapping at the end, and hide its meaning.
    pub fn advance(&mut self) -> Result<(), EmptySequenceError> {
        if self.cards.is_empty() {
            return Err(EmptySequenceError::NoCards);
        }
        self.position = (self.position + 1) % self.cards.len();
        self.revealed = false;
        Ok(())
    }

    /// Flip the card. Returns the new reveal state.
    pub fn toggle_reveal(&mut self) -> bool {
        self.revealed = !self.revealed;
        self.revealed
    }

    pub fn face(&self) -> Result<CardFace<'_>, EmptySequenceError> {
        let card = self.current()?;
        Ok(if self.revealed {
            CardFace::Back {
                meaning: &card.meaning,
                example: card.example.as_deref(),
                category: card.category,
            }
        } else {
            CardFace::Front {
                word: &card.word,
                pronunciation: card.pronunciation.as_deref(),
            }
        })
    }
}
