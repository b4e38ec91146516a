//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Operations that read and then write derived
//! values (`refresh_stats`, the toggles) must run atomically per entity.

use async_trait::async_trait;

use crate::aggregates::{ReactionAction, SpotStats};
use crate::entities::{
    Category, NewReview, NewSpot, ProfileChanges, Review, ReviewImage, ReviewInteraction,
    ReviewToggle, Spot, SpotChanges, StoredSpot, StoredSpotCounts, StoredSpotToggle,
    StoredSpotWithSpot, UserProfile,
};
use crate::error::DomainError;
use crate::value_objects::{CategoryId, Rating, ReviewCounters, ReviewId, SpotId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Spot Repository
// ============================================================================

#[async_trait]
pub trait SpotRepository: Send + Sync {
    /// Find spot by ID
    async fn find_by_id(&self, id: SpotId) -> RepoResult<Option<Spot>>;

    /// List spots, newest first, optionally restricted to a category
    async fn list(&self, category: Option<CategoryId>) -> RepoResult<Vec<Spot>>;

    /// Create a new spot
    async fn create(&self, spot: NewSpot) -> RepoResult<Spot>;

    /// Apply a partial update; `None` if the spot does not exist
    async fn update(&self, id: SpotId, changes: SpotChanges) -> RepoResult<Option<Spot>>;

    /// Delete a spot with its reviews and reactions; `false` if absent
    async fn delete(&self, id: SpotId) -> RepoResult<bool>;

    /// Recompute `review_count` and `average_rating` from the spot's reviews
    /// and persist them. `None` if the spot does not exist.
    async fn refresh_stats(&self, id: SpotId) -> RepoResult<Option<SpotStats>>;
}

// ============================================================================
// Review Repository
// ============================================================================

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Find review by ID
    async fn find_by_id(&self, id: ReviewId) -> RepoResult<Option<Review>>;

    /// List all reviews, newest first
    async fn list(&self) -> RepoResult<Vec<Review>>;

    /// List reviews of a spot, newest first
    async fn find_by_spot(&self, spot_id: SpotId) -> RepoResult<Vec<Review>>;

    /// Create a review together with its images
    async fn create(&self, review: NewReview) -> RepoResult<Review>;

    /// Replace rating and content; `None` if the review does not exist
    async fn update(&self, id: ReviewId, rating: Rating, content: String)
        -> RepoResult<Option<Review>>;

    /// Delete a review, returning the removed row
    async fn delete(&self, id: ReviewId) -> RepoResult<Option<Review>>;

    /// Overwrite like/dislike counters
    async fn set_counters(&self, id: ReviewId, counters: ReviewCounters) -> RepoResult<Option<Review>>;

    /// Images of one review
    async fn find_images(&self, review_id: ReviewId) -> RepoResult<Vec<ReviewImage>>;

    /// Images of every review on a spot
    async fn find_images_by_spot(&self, spot_id: SpotId) -> RepoResult<Vec<ReviewImage>>;
}

// ============================================================================
// Interaction Repository
// ============================================================================

#[async_trait]
pub trait InteractionRepository: Send + Sync {
    /// A user's reaction on a review
    async fn find(&self, review_id: ReviewId, user_id: UserId) -> RepoResult<Option<ReviewInteraction>>;

    /// A user's reactions on every review of a spot
    async fn find_for_user_on_spot(
        &self,
        spot_id: SpotId,
        user_id: UserId,
    ) -> RepoResult<Vec<ReviewInteraction>>;

    /// Apply a like/dislike action: update the reaction row and the review
    /// counters in one atomic step. `None` if the review does not exist.
    async fn toggle(
        &self,
        review_id: ReviewId,
        user_id: UserId,
        action: ReactionAction,
    ) -> RepoResult<Option<ReviewToggle>>;

    /// Count reaction rows on a review, as (likes, dislikes)
    async fn tally(&self, review_id: ReviewId) -> RepoResult<ReviewCounters>;
}

// ============================================================================
// Stored Spot Repository
// ============================================================================

#[async_trait]
pub trait StoredSpotRepository: Send + Sync {
    /// A user's reaction on a spot
    async fn find(&self, spot_id: SpotId, user_id: UserId) -> RepoResult<Option<StoredSpot>>;

    /// Apply a like/dislike action atomically. `None` if the spot does not exist.
    async fn toggle(
        &self,
        spot_id: SpotId,
        user_id: UserId,
        action: ReactionAction,
    ) -> RepoResult<Option<StoredSpotToggle>>;

    /// Like/dislike tallies for a spot
    async fn counts(&self, spot_id: SpotId) -> RepoResult<StoredSpotCounts>;

    /// Spots a user has reacted to, newest first
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<StoredSpotWithSpot>>;
}

// ============================================================================
// Category Repository
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by name
    async fn list(&self) -> RepoResult<Vec<Category>>;

    /// Find category by ID
    async fn find_by_id(&self, id: CategoryId) -> RepoResult<Option<Category>>;

    /// Create a category; duplicate names fail with `CategoryNameTaken`
    async fn create(&self, name: &str) -> RepoResult<Category>;

    /// Delete a category and its spot assignments; `false` if absent
    async fn delete(&self, id: CategoryId) -> RepoResult<bool>;

    /// Categories assigned to a spot
    async fn find_by_spot(&self, spot_id: SpotId) -> RepoResult<Vec<Category>>;

    /// Replace a spot's category set
    async fn assign_to_spot(&self, spot_id: SpotId, categories: &[CategoryId]) -> RepoResult<()>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find profile by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<UserProfile>>;

    /// Find profiles for a batch of IDs
    async fn find_many(&self, ids: &[UserId]) -> RepoResult<Vec<UserProfile>>;

    /// Return the profile, creating an empty one on first sight
    async fn ensure(&self, id: UserId) -> RepoResult<UserProfile>;

    /// Whether `username` belongs to a profile other than `except`
    async fn username_taken_by_other(&self, username: &str, except: UserId) -> RepoResult<bool>;

    /// Apply profile changes; `None` if the profile does not exist
    async fn update_profile(&self, id: UserId, changes: ProfileChanges)
        -> RepoResult<Option<UserProfile>>;
}

// ============================================================================
// Health
// ============================================================================

#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Round-trip to the backing store
    async fn ping(&self) -> RepoResult<()>;
}
