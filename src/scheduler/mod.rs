pub mod queue;
pub mod sm2;

pub use queue::{QueueConfig, Scheduled, select_study_queue, select_study_queue_with};
pub use sm2::{preview_intervals, update_review};

use chrono::Utc;

/// Current wall clock in epoch milliseconds.
///
/// The scheduler itself never consults the clock; callers pass `now`
/// explicitly so schedules stay deterministic and testable.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
