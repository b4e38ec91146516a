//! Spot model -> entity mapper

use spot_core::entities::Spot;
use spot_core::value_objects::{AverageRating, SpotId, UserId};

use crate::models::SpotModel;

impl From<SpotModel> for Spot {
    fn from(model: SpotModel) -> Self {
        Spot {
            id: SpotId::from_uuid(model.id),
            name: model.name,
            description: model.description,
            address: model.address,
            latitude: model.latitude,
            longitude: model.longitude,
            created_by: model.created_by.map(UserId::from_uuid),
            review_count: u32::try_from(model.review_count).unwrap_or(0),
            average_rating: model.average_rating.map(AverageRating::from_f64),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
