//! Deck is a named set of flashcards
use super::Flashcard;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    pub flashcards: Vec<Flashcard>,
}

impl Default for Deck {
    fn default() -> Self {
        Self {
            name: "My Deck".to_string(),
            flashcards: Vec::new(),
        }
    }
}

impl Deck {
    /// Number of cards whose scheduled review time has passed.
    pub fn due_count(&self, now_ms: i64) -> usize {
        self.flashcards
            .iter()
            .filter(|card| card.state.is_due(now_ms))
            .count()
    }

    /// Number of cards never studied.
    pub fn new_count(&self) -> usize {
        self.flashcards
            .iter()
            .filter(|card| card.state.is_new())
            .count()
    }
}
