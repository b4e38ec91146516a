//! Review interaction service
//!
//! Like/dislike toggles on reviews. The repository applies the row change and
//! the counter change as one atomic step; this layer maps the outcome.

use spot_core::aggregates::ReactionAction;
use spot_core::value_objects::{ReviewId, SpotId, UserId};
use spot_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{ReviewInteractionResponse, ReviewResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::review::ReviewService;

/// Interaction service
pub struct InteractionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InteractionService<'a> {
    /// Create a new InteractionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Like a review, or remove an existing like
    #[instrument(skip(self))]
    pub async fn toggle_like(
        &self,
        review_id: ReviewId,
        user_id: UserId,
    ) -> ServiceResult<ReviewResponse> {
        self.toggle(review_id, user_id, ReactionAction::Like).await
    }

    /// Dislike a review, or remove an existing dislike
    #[instrument(skip(self))]
    pub async fn toggle_dislike(
        &self,
        review_id: ReviewId,
        user_id: UserId,
    ) -> ServiceResult<ReviewResponse> {
        self.toggle(review_id, user_id, ReactionAction::Dislike).await
    }

    async fn toggle(
        &self,
        review_id: ReviewId,
        user_id: UserId,
        action: ReactionAction,
    ) -> ServiceResult<ReviewResponse> {
        let outcome = self
            .ctx
            .interaction_repo()
            .toggle(review_id, user_id, action)
            .await?
            .ok_or(DomainError::ReviewNotFound(review_id))?;

        info!(
            review_id = %review_id,
            user_id = %user_id,
            action = ?action,
            from = ?outcome.transition.from,
            to = ?outcome.transition.to,
            like_count = outcome.review.counters.like_count,
            dislike_count = outcome.review.counters.dislike_count,
            "Review reaction toggled"
        );

        ReviewService::new(self.ctx).detailed(outcome.review).await
    }

    /// The user's reaction on one review, if any
    #[instrument(skip(self))]
    pub async fn user_interaction(
        &self,
        review_id: ReviewId,
        user_id: UserId,
    ) -> ServiceResult<Option<ReviewInteractionResponse>> {
        Ok(self
            .ctx
            .interaction_repo()
            .find(review_id, user_id)
            .await?
            .map(ReviewInteractionResponse::from))
    }

    /// The user's reactions on every review of a spot
    #[instrument(skip(self))]
    pub async fn user_interactions_for_spot(
        &self,
        user_id: UserId,
        spot_id: SpotId,
    ) -> ServiceResult<Vec<ReviewInteractionResponse>> {
        Ok(self
            .ctx
            .interaction_repo()
            .find_for_user_on_spot(spot_id, user_id)
            .await?
            .into_iter()
            .map(ReviewInteractionResponse::from)
            .collect())
    }
}
