//! Review model -> entity mappers

use spot_core::entities::{Review, ReviewImage};
use spot_core::error::DomainError;
use spot_core::value_objects::{ImageId, Rating, ReviewCounters, ReviewId, SpotId, UserId};

use crate::models::{ReviewImageModel, ReviewModel};

/// A stored rating outside 1..=5 is corrupt data, not a bad request
pub fn stored_rating(raw: i32) -> Result<Rating, DomainError> {
    Rating::new(i64::from(raw))
        .map_err(|_| DomainError::InternalError(format!("stored rating {raw} is out of range")))
}

/// Rejects rows whose rating is outside 1..=5
impl TryFrom<ReviewModel> for Review {
    type Error = DomainError;

    fn try_from(model: ReviewModel) -> Result<Self, Self::Error> {
        Ok(Review {
            id: ReviewId::from_uuid(model.id),
            spot_id: SpotId::from_uuid(model.spot_id),
            user_id: model.user_id.map(UserId::from_uuid),
            rating: stored_rating(model.rating)?,
            content: model.content,
            counters: ReviewCounters::clamped(
                i64::from(model.like_count),
                i64::from(model.dislike_count),
            ),
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Convert a batch of rows, failing on the first invalid one
pub fn reviews_from_models(models: Vec<ReviewModel>) -> Result<Vec<Review>, DomainError> {
    models.into_iter().map(Review::try_from).collect()
}

impl From<ReviewImageModel> for ReviewImage {
    fn from(model: ReviewImageModel) -> Self {
        ReviewImage {
            id: ImageId::from_uuid(model.id),
            review_id: ReviewId::from_uuid(model.review_id),
            image_url: model.image_url,
            caption: model.caption,
            created_at: model.created_at,
        }
    }
}
