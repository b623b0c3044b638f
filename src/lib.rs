//! Spaced repetition scheduling core: SM-2 review updates and bounded,
//! prioritized study queue selection. Pure functions over per-card review
//! state; storage, sync, and UI are the caller's business.

pub mod models;
pub mod scheduler;

pub use models::{Deck, Flashcard, Rating, ReviewState};
pub use scheduler::{
    QueueConfig, Scheduled, now_millis, preview_intervals, select_study_queue,
    select_study_queue_with, update_review,
};
