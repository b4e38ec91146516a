//! PostgreSQL implementation of StoredSpotRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use spot_core::aggregates::{ReactionAction, ReactionState};
use spot_core::entities::{StoredSpot, StoredSpotCounts, StoredSpotToggle, StoredSpotWithSpot};
use spot_core::traits::{RepoResult, StoredSpotRepository};
use spot_core::value_objects::{SpotId, UserId};

use crate::models::{ReactionTallyModel, StoredSpotModel, StoredSpotWithSpotModel};

use super::error::map_db_error;

/// PostgreSQL implementation of StoredSpotRepository
#[derive(Clone)]
pub struct PgStoredSpotRepository {
    pool: PgPool,
}

impl PgStoredSpotRepository {
    /// Create a new PgStoredSpotRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoredSpotRepository for PgStoredSpotRepository {
    #[instrument(skip(self))]
    async fn find(&self, spot_id: SpotId, user_id: UserId) -> RepoResult<Option<StoredSpot>> {
        let result = sqlx::query_as::<_, StoredSpotModel>(
            r#"
            SELECT spot_id, user_id, is_liked, created_at
            FROM stored_spots
            WHERE spot_id = $1 AND user_id = $2
            "#,
        )
        .bind(spot_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(StoredSpot::from))
    }

    #[instrument(skip(self))]
    async fn toggle(
        &self,
        spot_id: SpotId,
        user_id: UserId,
        action: ReactionAction,
    ) -> RepoResult<Option<StoredSpotToggle>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let locked = sqlx::query_scalar::<_, uuid::Uuid>(
            "SELECT id FROM spots WHERE id = $1 FOR UPDATE",
        )
        .bind(spot_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if locked.is_none() {
            return Ok(None);
        }

        let current = sqlx::query_scalar::<_, bool>(
            "SELECT is_liked FROM stored_spots WHERE spot_id = $1 AND user_id = $2",
        )
        .bind(spot_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let transition = ReactionState::from_row(current).apply(action);

        let stored = match transition.to.to_row() {
            None => {
                sqlx::query("DELETE FROM stored_spots WHERE spot_id = $1 AND user_id = $2")
                    .bind(spot_id.into_inner())
                    .bind(user_id.into_inner())
                    .execute(&mut *tx)
                    .await
                    .map_err(map_db_error)?;
                None
            }
            Some(is_liked) => {
                let model = sqlx::query_as::<_, StoredSpotModel>(
                    r#"
                    INSERT INTO stored_spots (spot_id, user_id, is_liked, created_at)
                    VALUES ($1, $2, $3, NOW())
                    ON CONFLICT (spot_id, user_id) DO UPDATE SET is_liked = EXCLUDED.is_liked
                    RETURNING spot_id, user_id, is_liked, created_at
                    "#,
                )
                .bind(spot_id.into_inner())
                .bind(user_id.into_inner())
                .bind(is_liked)
                .fetch_one(&mut *tx)
                .await
                .map_err(map_db_error)?;
                Some(StoredSpot::from(model))
            }
        };

        tx.commit().await.map_err(map_db_error)?;

        debug!(from = ?transition.from, to = ?transition.to, "Spot reaction toggled");
        Ok(Some(StoredSpotToggle { stored, transition }))
    }

    #[instrument(skip(self))]
    async fn counts(&self, spot_id: SpotId) -> RepoResult<StoredSpotCounts> {
        let model = sqlx::query_as::<_, ReactionTallyModel>(
            r#"
            SELECT COUNT(*) FILTER (WHERE is_liked) AS likes,
                   COUNT(*) FILTER (WHERE NOT is_liked) AS dislikes
            FROM stored_spots
            WHERE spot_id = $1
            "#,
        )
        .bind(spot_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<StoredSpotWithSpot>> {
        let results = sqlx::query_as::<_, StoredSpotWithSpotModel>(
            r#"
            SELECT ss.user_id, ss.is_liked, ss.created_at AS stored_at,
                   s.id, s.name, s.description, s.address, s.latitude, s.longitude,
                   s.created_by, s.review_count, s.average_rating, s.created_at, s.updated_at
            FROM stored_spots ss
            INNER JOIN spots s ON s.id = ss.spot_id
            WHERE ss.user_id = $1
            ORDER BY ss.created_at DESC
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(StoredSpotWithSpot::from).collect())
    }
}
