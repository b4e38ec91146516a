//! Stored spot service
//!
//! Per-user like/dislike on spots with the same three-way toggle as reviews.
//! Spots carry no counters for this; tallies are computed on read.

use spot_core::aggregates::ReactionAction;
use spot_core::value_objects::{SpotId, UserId};
use spot_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{
    StoredSpotCountsResponse, StoredSpotResponse, StoredSpotWithSpotResponse,
    ToggleStoredSpotRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Stored spot service
pub struct StoredSpotService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StoredSpotService<'a> {
    /// Create a new StoredSpotService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply a like/dislike; `None` when the result is neutral
    #[instrument(skip(self))]
    pub async fn toggle(
        &self,
        user_id: UserId,
        request: ToggleStoredSpotRequest,
    ) -> ServiceResult<Option<StoredSpotResponse>> {
        let spot_id = SpotId::from_uuid(request.spot_id);
        let action = ReactionAction::from_is_liked(request.is_liked);

        let outcome = self
            .ctx
            .stored_spot_repo()
            .toggle(spot_id, user_id, action)
            .await?
            .ok_or(DomainError::SpotNotFound(spot_id))?;

        info!(
            spot_id = %spot_id,
            user_id = %user_id,
            from = ?outcome.transition.from,
            to = ?outcome.transition.to,
            "Stored spot toggled"
        );

        Ok(outcome.stored.map(StoredSpotResponse::from))
    }

    /// The user's reaction on a spot, if any
    #[instrument(skip(self))]
    pub async fn status(
        &self,
        spot_id: SpotId,
        user_id: UserId,
    ) -> ServiceResult<Option<StoredSpotResponse>> {
        Ok(self
            .ctx
            .stored_spot_repo()
            .find(spot_id, user_id)
            .await?
            .map(StoredSpotResponse::from))
    }

    /// Like/dislike tallies for a spot
    #[instrument(skip(self))]
    pub async fn counts(&self, spot_id: SpotId) -> ServiceResult<StoredSpotCountsResponse> {
        Ok(self.ctx.stored_spot_repo().counts(spot_id).await?.into())
    }

    /// Every spot the user has reacted to, newest first
    #[instrument(skip(self))]
    pub async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> ServiceResult<Vec<StoredSpotWithSpotResponse>> {
        Ok(self
            .ctx
            .stored_spot_repo()
            .find_by_user(user_id)
            .await?
            .into_iter()
            .map(StoredSpotWithSpotResponse::from)
            .collect())
    }
}
