//! Study queue selection.
//!
//! Builds a bounded session from a candidate set: every overdue card in
//! due-date order first, then a capped random trickle of never-studied
//! cards. Cards scheduled for the future never appear.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::ReviewState;

/// A card the scheduler can queue.
///
/// This is the only seam between the scheduler and whatever store owns the
/// cards; the store keeps identity and durability, the scheduler only reads
/// the review state.
pub trait Scheduled {
    fn review_state(&self) -> &ReviewState;
}

/// Session shaping parameters.
#[derive(Clone, Copy, Debug)]
pub struct QueueConfig {
    /// Maximum cards in one session.
    pub limit: usize,
    /// Fraction of the limit reserved for never-studied cards, in [0, 1].
    pub new_ratio: f64,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            limit: 30,
            new_ratio: 0.2,
        }
    }
}

/// Selects a study queue using the thread-local RNG for the new-card sample.
pub fn select_study_queue<T: Scheduled>(
    cards: Vec<T>,
    now_ms: i64,
    config: &QueueConfig,
) -> Vec<T> {
    select_study_queue_with(cards, now_ms, config, &mut rand::thread_rng())
}

/// Selects a study queue with a caller-supplied RNG.
///
/// Due cards come first, most overdue leading; after them a uniform random
/// sample of new cards, at most `round(limit * new_ratio)` of them. The due
/// portion absorbs any unused new-card budget, but a due shortfall is never
/// given back to new cards. Result length never exceeds `config.limit`.
pub fn select_study_queue_with<T, R>(
    cards: Vec<T>,
    now_ms: i64,
    config: &QueueConfig,
    rng: &mut R,
) -> Vec<T>
where
    T: Scheduled,
    R: Rng + ?Sized,
{
    let mut due = Vec::new();
    let mut fresh = Vec::new();
    for card in cards {
        let state = card.review_state();
        if state.is_new() {
            fresh.push(card);
        } else if state.is_due(now_ms) {
            due.push(card);
        }
        // Not yet due: excluded from the session entirely
    }

    // Earliest-overdue first; sort_by_key is stable
    due.sort_by_key(|card| card.review_state().due_at);

    let ratio = config.new_ratio.clamp(0.0, 1.0);
    let new_count = fresh.len().min((config.limit as f64 * ratio).round() as usize);
    let due_count = due.len().min(config.limit.saturating_sub(new_count));

    // Uniform sample without replacement: full shuffle, take a prefix
    fresh.shuffle(rng);
    fresh.truncate(new_count);

    let mut queue = due;
    queue.truncate(due_count);
    queue.append(&mut fresh);
    queue
}
