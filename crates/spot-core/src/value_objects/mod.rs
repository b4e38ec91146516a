//! Value objects - immutable types that represent domain concepts

mod counters;
mod ids;
mod rating;

pub use counters::ReviewCounters;
pub use ids::{CategoryId, IdParseError, ImageId, ReviewId, SpotId, UserId};
pub use rating::{AverageRating, Rating};
