//! Review entity - a rated write-up of a spot

use chrono::{DateTime, Utc};

use crate::value_objects::{ImageId, Rating, ReviewCounters, ReviewId, SpotId, UserId};

/// Review entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: ReviewId,
    pub spot_id: SpotId,
    pub user_id: Option<UserId>,
    pub rating: Rating,
    pub content: String,
    pub counters: ReviewCounters,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    /// Create a new review with zeroed counters
    pub fn new(id: ReviewId, spot_id: SpotId, user_id: Option<UserId>, rating: Rating, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            spot_id,
            user_id,
            rating,
            content,
            counters: ReviewCounters::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the given user wrote this review
    #[inline]
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.user_id == Some(user_id)
    }

    /// Edit rating and content
    pub fn edit(&mut self, rating: Rating, content: String) {
        self.rating = rating;
        self.content = content;
        self.updated_at = Utc::now();
    }
}

/// Image attached to a review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewImage {
    pub id: ImageId,
    pub review_id: ReviewId,
    pub image_url: String,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Review joined with its images and author display fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewWithDetails {
    pub review: Review,
    pub images: Vec<ReviewImage>,
    pub user_name: Option<String>,
    pub user_avatar: Option<String>,
}

/// Fields required to create a review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub spot_id: SpotId,
    pub user_id: Option<UserId>,
    pub rating: Rating,
    pub content: String,
    pub images: Vec<NewReviewImage>,
}

/// Image to attach on review creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReviewImage {
    pub image_url: String,
    pub caption: Option<String>,
}
