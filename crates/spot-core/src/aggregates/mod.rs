//! Aggregate rules - the pure logic that keeps derived counters consistent
//!
//! Repositories call into these types while holding whatever lock their backend
//! uses, so the math lives in one place regardless of storage.

mod reaction;
mod spot_stats;

pub use reaction::{ReactionAction, ReactionState, Transition};
pub use spot_stats::SpotStats;
