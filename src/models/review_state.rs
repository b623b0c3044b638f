//! Per-card spaced repetition state.
//!
//! Every flashcard owns exactly one `ReviewState`. Grading never mutates the
//! existing record; the scheduler returns a fresh one that replaces it.

use serde::{Deserialize, Serialize};

use crate::models::Rating;

/// Spaced repetition bookkeeping for a single card.
///
/// Timestamps are epoch milliseconds. `due_at == 0` is the new-card
/// sentinel: the card has never been graded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewState {
    /// Easiness factor. Starts at 2.5, never drops below 1.3.
    pub ease: f64,
    /// Days until the next review.
    pub interval: i32,
    /// Consecutive successful recalls; resets to 0 on failure.
    pub repetitions: u32,
    /// When the next review is due; 0 = never reviewed.
    pub due_at: i64,
    /// When the card was last graded.
    pub last_reviewed_at: Option<i64>,
    /// Total failed reviews over the card's lifetime.
    pub lapses: u32,
}

impl Default for ReviewState {
    fn default() -> Self {
        Self {
            ease: 2.5,
            interval: 0,
            repetitions: 0,
            due_at: 0,
            last_reviewed_at: None,
            lapses: 0,
        }
    }
}

impl ReviewState {
    /// True if the card has never been graded.
    pub fn is_new(&self) -> bool {
        self.due_at == 0
    }

    /// True if the card was studied before and its review time has passed.
    pub fn is_due(&self, now_ms: i64) -> bool {
        self.due_at != 0 && self.due_at <= now_ms
    }

    /// Grades the card with one of the user-facing ratings and returns the
    /// replacement state.
    pub fn grade(&self, rating: Rating, now_ms: i64) -> ReviewState {
        crate::scheduler::update_review(self, rating.quality(), now_ms)
    }
}
