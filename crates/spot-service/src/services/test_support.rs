//! Fixtures shared by the service tests

use spot_core::entities::{NewReview, NewSpot, Review, Spot};
use spot_core::{Rating, SpotId, UserId};
use spot_db::InMemoryStore;

use super::context::ServiceContext;

pub(crate) struct TestContext {
    pub store: InMemoryStore,
    pub ctx: ServiceContext,
}

impl TestContext {
    pub fn new() -> Self {
        let store = InMemoryStore::new();
        let ctx = ServiceContext::in_memory(store.clone());
        Self { store, ctx }
    }
}

pub(crate) async fn seed_spot(ctx: &ServiceContext) -> Spot {
    ctx.spot_repo()
        .create(NewSpot {
            name: "Lookout point".to_string(),
            description: Some("Sunset views".to_string()),
            address: None,
            latitude: 37.57,
            longitude: 126.98,
            created_by: None,
        })
        .await
        .unwrap()
}

/// Insert a review row directly, without refreshing spot stats
pub(crate) async fn seed_review(
    ctx: &ServiceContext,
    spot_id: SpotId,
    user_id: Option<UserId>,
    rating: i64,
) -> Review {
    ctx.review_repo()
        .create(NewReview {
            spot_id,
            user_id,
            rating: Rating::new(rating).unwrap(),
            content: format!("{rating} stars"),
            images: Vec::new(),
        })
        .await
        .unwrap()
}
