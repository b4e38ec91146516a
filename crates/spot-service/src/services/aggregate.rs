//! Aggregate consistency
//!
//! Derived values are never adjusted incrementally from the request. Spot
//! statistics are recomputed from the full set of the spot's reviews, and review
//! counters are written clamped at zero.

use spot_core::aggregates::SpotStats;
use spot_core::entities::Review;
use spot_core::value_objects::{ReviewCounters, ReviewId, SpotId};
use spot_core::DomainError;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Aggregate service
pub struct AggregateService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AggregateService<'a> {
    /// Create a new AggregateService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Recompute `review_count` and `average_rating` for a spot and persist them
    #[instrument(skip(self))]
    pub async fn recompute_spot_stats(&self, spot_id: SpotId) -> ServiceResult<SpotStats> {
        let stats = self
            .ctx
            .spot_repo()
            .refresh_stats(spot_id)
            .await?
            .ok_or(DomainError::SpotNotFound(spot_id))?;

        info!(
            spot_id = %spot_id,
            review_count = stats.review_count,
            average_rating = ?stats.average_rating.map(|a| a.value()),
            "Spot stats recomputed"
        );

        Ok(stats)
    }

    /// Overwrite a review's counters; negative inputs are clamped to zero
    #[instrument(skip(self))]
    pub async fn set_review_counters(
        &self,
        review_id: ReviewId,
        like_count: i64,
        dislike_count: i64,
    ) -> ServiceResult<Review> {
        let counters = ReviewCounters::clamped(like_count, dislike_count);

        let review = self
            .ctx
            .review_repo()
            .set_counters(review_id, counters)
            .await?
            .ok_or(DomainError::ReviewNotFound(review_id))?;

        info!(
            review_id = %review_id,
            like_count = counters.like_count,
            dislike_count = counters.dislike_count,
            "Review counters written"
        );

        Ok(review)
    }

    /// Recount a review's reaction rows and store the result as its counters
    #[instrument(skip(self))]
    pub async fn reconcile_review_counters(&self, review_id: ReviewId) -> ServiceResult<Review> {
        let tally = self.ctx.interaction_repo().tally(review_id).await?;

        self.set_review_counters(
            review_id,
            i64::from(tally.like_count),
            i64::from(tally.dislike_count),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{seed_review, seed_spot, TestContext};
    use spot_core::aggregates::ReactionAction;
    use spot_core::{AverageRating, UserId};

    #[tokio::test]
    async fn test_recompute_spot_stats_five_and_three() {
        let t = TestContext::new();
        let spot = seed_spot(&t.ctx).await;
        seed_review(&t.ctx, spot.id, None, 5).await;
        seed_review(&t.ctx, spot.id, None, 3).await;

        let stats = AggregateService::new(&t.ctx)
            .recompute_spot_stats(spot.id)
            .await
            .unwrap();

        assert_eq!(stats.review_count, 2);
        assert_eq!(stats.average_rating, Some(AverageRating::from_f64(4.0)));

        let stored = t.ctx.spot_repo().find_by_id(spot.id).await.unwrap().unwrap();
        assert_eq!(stored.stats(), stats);
    }

    #[tokio::test]
    async fn test_recompute_is_idempotent() {
        let t = TestContext::new();
        let spot = seed_spot(&t.ctx).await;
        seed_review(&t.ctx, spot.id, None, 4).await;
        seed_review(&t.ctx, spot.id, None, 4).await;
        seed_review(&t.ctx, spot.id, None, 5).await;

        let service = AggregateService::new(&t.ctx);
        let first = service.recompute_spot_stats(spot.id).await.unwrap();
        let second = service.recompute_spot_stats(spot.id).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.average_rating.map(AverageRating::tenths), Some(43));
    }

    #[tokio::test]
    async fn test_recompute_without_reviews_clears_average() {
        let t = TestContext::new();
        let spot = seed_spot(&t.ctx).await;

        let stats = AggregateService::new(&t.ctx)
            .recompute_spot_stats(spot.id)
            .await
            .unwrap();

        assert_eq!(stats, SpotStats::EMPTY);
    }

    #[tokio::test]
    async fn test_recompute_missing_spot() {
        let t = TestContext::new();
        let err = AggregateService::new(&t.ctx)
            .recompute_spot_stats(SpotId::generate())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_set_review_counters_clamps_negative() {
        let t = TestContext::new();
        let spot = seed_spot(&t.ctx).await;
        let review = seed_review(&t.ctx, spot.id, None, 3).await;

        let updated = AggregateService::new(&t.ctx)
            .set_review_counters(review.id, -2, 5)
            .await
            .unwrap();

        assert_eq!(updated.counters, ReviewCounters::new(0, 5));
    }

    #[tokio::test]
    async fn test_reconcile_restores_counters_from_rows() {
        let t = TestContext::new();
        let spot = seed_spot(&t.ctx).await;
        let review = seed_review(&t.ctx, spot.id, None, 3).await;

        let repo = t.ctx.interaction_repo();
        repo.toggle(review.id, UserId::generate(), ReactionAction::Like)
            .await
            .unwrap();
        repo.toggle(review.id, UserId::generate(), ReactionAction::Dislike)
            .await
            .unwrap();

        let service = AggregateService::new(&t.ctx);
        service.set_review_counters(review.id, 9, 9).await.unwrap();

        let repaired = service.reconcile_review_counters(review.id).await.unwrap();
        assert_eq!(repaired.counters, ReviewCounters::new(1, 1));
    }
}
