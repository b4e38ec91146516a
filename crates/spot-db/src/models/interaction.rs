//! Reaction database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::SpotModel;

/// Database model for review_interactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReviewInteractionModel {
    pub review_id: Uuid,
    pub user_id: Uuid,
    pub is_liked: bool,
    pub created_at: DateTime<Utc>,
}

/// Database model for stored_spots table
#[derive(Debug, Clone, FromRow)]
pub struct StoredSpotModel {
    pub spot_id: Uuid,
    pub user_id: Uuid,
    pub is_liked: bool,
    pub created_at: DateTime<Utc>,
}

/// stored_spots joined with spots (from query)
#[derive(Debug, Clone, FromRow)]
pub struct StoredSpotWithSpotModel {
    pub user_id: Uuid,
    pub is_liked: bool,
    pub stored_at: DateTime<Utc>,
    #[sqlx(flatten)]
    pub spot: SpotModel,
}

/// Liked/disliked row counts (from query)
#[derive(Debug, Clone, FromRow)]
pub struct ReactionTallyModel {
    pub likes: i64,
    pub dislikes: i64,
}
