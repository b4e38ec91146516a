//! Reaction model -> entity mappers

use spot_core::entities::{ReviewInteraction, StoredSpot, StoredSpotCounts, StoredSpotWithSpot};
use spot_core::value_objects::{ReviewCounters, ReviewId, SpotId, UserId};

use crate::models::{
    ReactionTallyModel, ReviewInteractionModel, StoredSpotModel, StoredSpotWithSpotModel,
};

impl From<ReviewInteractionModel> for ReviewInteraction {
    fn from(model: ReviewInteractionModel) -> Self {
        ReviewInteraction {
            review_id: ReviewId::from_uuid(model.review_id),
            user_id: UserId::from_uuid(model.user_id),
            is_liked: model.is_liked,
            created_at: model.created_at,
        }
    }
}

impl From<StoredSpotModel> for StoredSpot {
    fn from(model: StoredSpotModel) -> Self {
        StoredSpot {
            spot_id: SpotId::from_uuid(model.spot_id),
            user_id: UserId::from_uuid(model.user_id),
            is_liked: model.is_liked,
            created_at: model.created_at,
        }
    }
}

impl From<StoredSpotWithSpotModel> for StoredSpotWithSpot {
    fn from(model: StoredSpotWithSpotModel) -> Self {
        StoredSpotWithSpot {
            stored: StoredSpot {
                spot_id: SpotId::from_uuid(model.spot.id),
                user_id: UserId::from_uuid(model.user_id),
                is_liked: model.is_liked,
                created_at: model.stored_at,
            },
            spot: model.spot.into(),
        }
    }
}

impl From<ReactionTallyModel> for StoredSpotCounts {
    fn from(model: ReactionTallyModel) -> Self {
        StoredSpotCounts {
            likes: u64::try_from(model.likes).unwrap_or(0),
            dislikes: u64::try_from(model.dislikes).unwrap_or(0),
        }
    }
}

impl From<ReactionTallyModel> for ReviewCounters {
    fn from(model: ReactionTallyModel) -> Self {
        ReviewCounters::clamped(model.likes, model.dislikes)
    }
}
