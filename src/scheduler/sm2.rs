//! SM-2 (SuperMemo 2) spaced repetition algorithm implementation.
//!
//! The SM-2 algorithm calculates optimal review intervals based on recall quality:
//! - Each card has an easiness factor (EF) that adjusts based on performance
//! - Quality grades 0-2: reset repetitions, schedule relearning for tomorrow
//! - Quality grades 3-5: increase interval progressively (1 day → 6 days → EF multiplier)
//! - EF is adjusted after each review and has a minimum value of 1.3
//! - Higher quality responses lead to longer intervals between reviews

use crate::models::{Rating, ReviewState};

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Easiness factor never drops below this.
const MIN_EASE: f64 = 1.3;

/// Calculates the replacement review state according to the SM-2 algorithm.
/// quality: 0-5 (0 = complete blackout, 5 = perfect response)
///
/// Total over its inputs: out-of-range quality is clamped, never rejected,
/// so grading always yields a usable schedule.
pub fn update_review(state: &ReviewState, quality: u8, now_ms: i64) -> ReviewState {
    let quality = quality.min(5); // Clamp to 0-5

    let mut interval = state.interval;
    let mut repetitions = state.repetitions;
    let mut lapses = state.lapses;

    if quality < 3 {
        // Failed recall: relearn from scratch, due again tomorrow
        repetitions = 0;
        interval = 1;
        lapses += 1;
    } else {
        interval = match repetitions {
            0 => 1, // First success: 1 day
            1 => 6, // Second success: 6 days
            // Subsequent: grow by the ease factor as it was before this grade
            _ => ((state.interval as f64 * state.ease).round() as i32).max(1),
        };
        repetitions += 1;
    }

    // E-Factor moves on every grade, success or failure
    let q = quality as f64;
    let mut ease = state.ease + (0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02));
    if ease < MIN_EASE {
        ease = MIN_EASE;
    }

    ReviewState {
        ease,
        interval,
        repetitions,
        due_at: now_ms + i64::from(interval) * MS_PER_DAY,
        last_reviewed_at: Some(now_ms),
        lapses,
    }
}

/// The interval, in days, that each user-facing rating would produce for
/// this card, in `Rating::ALL` order. Lets a session driver label its
/// grading buttons without committing to a grade.
pub fn preview_intervals(state: &ReviewState) -> [i32; 4] {
    Rating::ALL.map(|rating| update_review(state, rating.quality(), 0).interval)
}
