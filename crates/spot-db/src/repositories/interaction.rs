//! PostgreSQL implementation of InteractionRepository
//!
//! A toggle locks the review row first, so every read-then-write on one
//! review's reactions is serialized across connections.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use spot_core::aggregates::{ReactionAction, ReactionState};
use spot_core::entities::{Review, ReviewInteraction, ReviewToggle};
use spot_core::traits::{InteractionRepository, RepoResult};
use spot_core::value_objects::{ReviewCounters, ReviewId, SpotId, UserId};

use crate::models::{ReactionTallyModel, ReviewInteractionModel, ReviewModel};

use super::error::map_db_error;

/// PostgreSQL implementation of InteractionRepository
#[derive(Clone)]
pub struct PgInteractionRepository {
    pool: PgPool,
}

impl PgInteractionRepository {
    /// Create a new PgInteractionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InteractionRepository for PgInteractionRepository {
    #[instrument(skip(self))]
    async fn find(&self, review_id: ReviewId, user_id: UserId) -> RepoResult<Option<ReviewInteraction>> {
        let result = sqlx::query_as::<_, ReviewInteractionModel>(
            r#"
            SELECT review_id, user_id, is_liked, created_at
            FROM review_interactions
            WHERE review_id = $1 AND user_id = $2
            "#,
        )
        .bind(review_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ReviewInteraction::from))
    }

    #[instrument(skip(self))]
    async fn find_for_user_on_spot(
        &self,
        spot_id: SpotId,
        user_id: UserId,
    ) -> RepoResult<Vec<ReviewInteraction>> {
        let results = sqlx::query_as::<_, ReviewInteractionModel>(
            r#"
            SELECT ri.review_id, ri.user_id, ri.is_liked, ri.created_at
            FROM review_interactions ri
            INNER JOIN reviews r ON r.id = ri.review_id
            WHERE r.spot_id = $1 AND ri.user_id = $2
            ORDER BY ri.created_at
            "#,
        )
        .bind(spot_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ReviewInteraction::from).collect())
    }

    #[instrument(skip(self))]
    async fn toggle(
        &self,
        review_id: ReviewId,
        user_id: UserId,
        action: ReactionAction,
    ) -> RepoResult<Option<ReviewToggle>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let locked = sqlx::query_scalar::<_, uuid::Uuid>(
            "SELECT id FROM reviews WHERE id = $1 FOR UPDATE",
        )
        .bind(review_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if locked.is_none() {
            return Ok(None);
        }

        let current = sqlx::query_scalar::<_, bool>(
            "SELECT is_liked FROM review_interactions WHERE review_id = $1 AND user_id = $2",
        )
        .bind(review_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let transition = ReactionState::from_row(current).apply(action);

        match transition.to.to_row() {
            None => {
                sqlx::query("DELETE FROM review_interactions WHERE review_id = $1 AND user_id = $2")
                    .bind(review_id.into_inner())
                    .bind(user_id.into_inner())
                    .execute(&mut *tx)
                    .await
                    .map_err(map_db_error)?;
            }
            Some(is_liked) => {
                sqlx::query(
                    r#"
                    INSERT INTO review_interactions (review_id, user_id, is_liked, created_at)
                    VALUES ($1, $2, $3, NOW())
                    ON CONFLICT (review_id, user_id) DO UPDATE SET is_liked = EXCLUDED.is_liked
                    "#,
                )
                .bind(review_id.into_inner())
                .bind(user_id.into_inner())
                .bind(is_liked)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
        }

        let model = sqlx::query_as::<_, ReviewModel>(
            r#"
            UPDATE reviews
            SET like_count = GREATEST(0, like_count + $2),
                dislike_count = GREATEST(0, dislike_count + $3)
            WHERE id = $1
            RETURNING id, spot_id, user_id, rating, content, like_count, dislike_count,
                      created_at, updated_at
            "#,
        )
        .bind(review_id.into_inner())
        .bind(transition.like_delta)
        .bind(transition.dislike_delta)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        debug!(from = ?transition.from, to = ?transition.to, "Review reaction toggled");
        Ok(Some(ReviewToggle {
            review: Review::try_from(model)?,
            transition,
        }))
    }

    #[instrument(skip(self))]
    async fn tally(&self, review_id: ReviewId) -> RepoResult<ReviewCounters> {
        let model = sqlx::query_as::<_, ReactionTallyModel>(
            r#"
            SELECT COUNT(*) FILTER (WHERE is_liked) AS likes,
                   COUNT(*) FILTER (WHERE NOT is_liked) AS dislikes
            FROM review_interactions
            WHERE review_id = $1
            "#,
        )
        .bind(review_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.into())
    }
}
