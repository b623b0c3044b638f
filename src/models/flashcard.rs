//! Flashcard is a pair <term, definition> plus its review schedule.
use serde::{Deserialize, Serialize};

use crate::models::ReviewState;
use crate::scheduler::Scheduled;

#[derive(Clone, Serialize, Deserialize)]
pub struct Flashcard {
    pub term: String,
    pub definition: String,
    pub state: ReviewState,
}

impl Flashcard {
    /// Creates a card that has never been studied.
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            state: ReviewState::default(),
        }
    }
}

impl Scheduled for Flashcard {
    fn review_state(&self) -> &ReviewState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flashcard_creation() {
        let card = Flashcard::new("hello", "cześć");

        assert_eq!(card.term, "hello");
        assert_eq!(card.definition, "cześć");
        assert!(card.state.is_new());
    }

    #[test]
    fn test_flashcard_serde_round_trip() {
        let card = Flashcard::new("dziękuję", "thank you");

        let json = serde_json::to_string(&card).unwrap();
        let restored: Flashcard = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.term, card.term);
        assert_eq!(restored.definition, card.definition);
        assert_eq!(restored.state, card.state);
    }
}
