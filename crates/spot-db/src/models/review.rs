//! Review database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for reviews table
#[derive(Debug, Clone, FromRow)]
pub struct ReviewModel {
    pub id: Uuid,
    pub spot_id: Uuid,
    pub user_id: Option<Uuid>,
    pub rating: i32,
    pub content: String,
    pub like_count: i32,
    pub dislike_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for review_images table
#[derive(Debug, Clone, FromRow)]
pub struct ReviewImageModel {
    pub id: Uuid,
    pub review_id: Uuid,
    pub image_url: String,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
}
