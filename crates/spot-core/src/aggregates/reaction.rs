//! Like/dislike toggle state machine
//!
//! One reaction per (user, entity). The persisted form is an optional row with
//! an `is_liked` flag: no row is `None`, `true` is `Liked`, `false` is `Disliked`.
//!
//! | current  | like                       | dislike                       |
//! |----------|----------------------------|-------------------------------|
//! | None     | Liked, like +1             | Disliked, dislike +1          |
//! | Liked    | None, like -1              | Disliked, like -1, dislike +1 |
//! | Disliked | Liked, dislike -1, like +1 | None, dislike -1              |

use serde::{Deserialize, Serialize};

use crate::value_objects::ReviewCounters;

/// Current reaction of one user on one entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionState {
    None,
    Liked,
    Disliked,
}

/// User action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionAction {
    Like,
    Dislike,
}

/// Result of applying one action to one state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: ReactionState,
    pub to: ReactionState,
    pub like_delta: i32,
    pub dislike_delta: i32,
}

impl ReactionState {
    /// Decode the persisted row flag
    pub fn from_row(is_liked: Option<bool>) -> Self {
        match is_liked {
            None => Self::None,
            Some(true) => Self::Liked,
            Some(false) => Self::Disliked,
        }
    }

    /// Encode as a row flag; `None` means the row must not exist
    pub fn to_row(self) -> Option<bool> {
        match self {
            Self::None => None,
            Self::Liked => Some(true),
            Self::Disliked => Some(false),
        }
    }

    const fn like_weight(self) -> i32 {
        match self {
            Self::Liked => 1,
            _ => 0,
        }
    }

    const fn dislike_weight(self) -> i32 {
        match self {
            Self::Disliked => 1,
            _ => 0,
        }
    }

    /// Apply one action. Repeating the action that produced the current state clears it.
    pub fn apply(self, action: ReactionAction) -> Transition {
        let to = match (self, action) {
            (Self::Liked, ReactionAction::Like) | (Self::Disliked, ReactionAction::Dislike) => {
                Self::None
            }
            (_, ReactionAction::Like) => Self::Liked,
            (_, ReactionAction::Dislike) => Self::Disliked,
        };

        Transition {
            from: self,
            to,
            like_delta: to.like_weight() - self.like_weight(),
            dislike_delta: to.dislike_weight() - self.dislike_weight(),
        }
    }
}

impl ReactionAction {
    /// Map the `is_liked` request flag onto an action
    pub fn from_is_liked(is_liked: bool) -> Self {
        if is_liked {
            Self::Like
        } else {
            Self::Dislike
        }
    }
}

impl Transition {
    /// Counters after this transition, clamped at zero
    pub fn apply_to(&self, counters: ReviewCounters) -> ReviewCounters {
        counters.offset(self.like_delta, self.dislike_delta)
    }

    /// Whether the persisted row changes
    pub fn is_change(&self) -> bool {
        self.from != self.to
    }
}
