//! Like/dislike counters stored on a review

use serde::{Deserialize, Serialize};

/// Denormalized reaction counters; neither value can go below zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReviewCounters {
    pub like_count: u32,
    pub dislike_count: u32,
}

impl ReviewCounters {
    pub const ZERO: Self = Self {
        like_count: 0,
        dislike_count: 0,
    };

    pub const fn new(like_count: u32, dislike_count: u32) -> Self {
        Self {
            like_count,
            dislike_count,
        }
    }

    /// Build counters from untrusted signed values, clamping at zero
    pub fn clamped(like_count: i64, dislike_count: i64) -> Self {
        Self {
            like_count: like_count.clamp(0, i64::from(u32::MAX)) as u32,
            dislike_count: dislike_count.clamp(0, i64::from(u32::MAX)) as u32,
        }
    }

    /// Apply signed deltas, saturating at zero
    pub fn offset(self, like_delta: i32, dislike_delta: i32) -> Self {
        Self {
            like_count: self.like_count.saturating_add_signed(like_delta),
            dislike_count: self.dislike_count.saturating_add_signed(dislike_delta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped() {
        assert_eq!(ReviewCounters::clamped(-3, 2), ReviewCounters::new(0, 2));
        assert_eq!(ReviewCounters::clamped(4, -1), ReviewCounters::new(4, 0));
    }

    #[test]
    fn test_offset_never_negative() {
        let counters = ReviewCounters::ZERO.offset(-1, -1);
        assert_eq!(counters, ReviewCounters::ZERO);

        let counters = ReviewCounters::new(1, 0).offset(-1, 1);
        assert_eq!(counters, ReviewCounters::new(0, 1));
    }
}
