//! # spot-core
//!
//! Domain layer containing entities, value objects, aggregate rules, and the
//! repository traits (ports) the persistence gateway implements.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use aggregates::{ReactionAction, ReactionState, SpotStats, Transition};
pub use entities::{
    Category, NewReview, NewReviewImage, NewSpot, ProfileChanges, Review, ReviewImage,
    ReviewInteraction, ReviewToggle, ReviewWithDetails, Spot, SpotChanges, StoredSpot,
    StoredSpotCounts, StoredSpotToggle, StoredSpotWithSpot, UserProfile,
};
pub use error::DomainError;
pub use traits::{
    CategoryRepository, HealthCheck, InteractionRepository, RepoResult, ReviewRepository,
    SpotRepository, StoredSpotRepository, UserRepository,
};
pub use value_objects::{
    AverageRating, CategoryId, IdParseError, ImageId, Rating, ReviewCounters, ReviewId, SpotId,
    UserId,
};
