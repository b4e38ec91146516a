//! Per-user reactions: review like/dislike and spot like/dislike

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::aggregates::{ReactionState, Transition};
use crate::entities::{Review, Spot};
use crate::value_objects::{ReviewId, SpotId, UserId};

/// A user's reaction on a review, keyed by (review_id, user_id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewInteraction {
    pub review_id: ReviewId,
    pub user_id: UserId,
    pub is_liked: bool,
    pub created_at: DateTime<Utc>,
}

impl ReviewInteraction {
    #[inline]
    pub fn state(&self) -> ReactionState {
        ReactionState::from_row(Some(self.is_liked))
    }
}

/// Outcome of a review toggle: refreshed review plus the transition applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewToggle {
    pub review: Review,
    pub transition: Transition,
}

/// A user's like/dislike on a spot, keyed by (spot_id, user_id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSpot {
    pub spot_id: SpotId,
    pub user_id: UserId,
    pub is_liked: bool,
    pub created_at: DateTime<Utc>,
}

impl StoredSpot {
    #[inline]
    pub fn state(&self) -> ReactionState {
        ReactionState::from_row(Some(self.is_liked))
    }
}

/// Outcome of a spot toggle; `stored` is `None` once the reaction is neutral
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSpotToggle {
    pub stored: Option<StoredSpot>,
    pub transition: Transition,
}

/// Stored spot joined with the spot it refers to
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSpotWithSpot {
    pub stored: StoredSpot,
    pub spot: Spot,
}

/// Like/dislike tallies for a spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StoredSpotCounts {
    pub likes: u64,
    pub dislikes: u64,
}

impl StoredSpotCounts {
    /// Tally from row flags
    pub fn tally<I>(flags: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        flags.into_iter().fold(Self::default(), |mut acc, is_liked| {
            if is_liked {
                acc.likes += 1;
            } else {
                acc.dislikes += 1;
            }
            acc
        })
    }
}
