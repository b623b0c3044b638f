//! User-facing recall ratings.
//!
//! The SM-2 formula accepts the full 0-5 quality scale, but only four grades
//! are ever exposed to the user. Modeling them as a closed enum keeps the
//! unselectable intermediate qualities (1, 2) out of the UI surface.

use serde::{Deserialize, Serialize};

/// How well the user recalled a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    /// No recall at all (quality 0).
    Forgot,
    /// Recalled with serious difficulty (quality 3).
    Hard,
    /// Recalled after some hesitation (quality 4).
    Good,
    /// Perfect recall (quality 5).
    Easy,
}

impl Rating {
    /// All ratings in grading-button order.
    pub const ALL: [Rating; 4] = [Rating::Forgot, Rating::Hard, Rating::Good, Rating::Easy];

    /// The SM-2 quality value behind this rating.
    pub fn quality(self) -> u8 {
        match self {
            Rating::Forgot => 0,
            Rating::Hard => 3,
            Rating::Good => 4,
            Rating::Easy => 5,
        }
    }

    /// True for ratings that count as a successful recall.
    pub fn is_success(self) -> bool {
        self.quality() >= 3
    }

    pub fn label(self) -> &'static str {
        match self {
            Rating::Forgot => "Forgot",
            Rating::Hard => "Hard",
            Rating::Good => "Good",
            Rating::Easy => "Easy",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_values() {
        assert_eq!(Rating::Forgot.quality(), 0);
        assert_eq!(Rating::Hard.quality(), 3);
        assert_eq!(Rating::Good.quality(), 4);
        assert_eq!(Rating::Easy.quality(), 5);
    }

    #[test]
    fn test_only_forgot_is_a_failure() {
        for rating in Rating::ALL {
            assert_eq!(rating.is_success(), rating != Rating::Forgot);
        }
    }

    #[test]
    fn test_all_covers_every_variant_once() {
        assert_eq!(Rating::ALL.len(), 4);
        for (i, a) in Rating::ALL.iter().enumerate() {
            for b in &Rating::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
