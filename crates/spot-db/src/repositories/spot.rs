//! PostgreSQL implementation of SpotRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use spot_core::aggregates::SpotStats;
use spot_core::entities::{NewSpot, Spot, SpotChanges};
use spot_core::traits::{RepoResult, SpotRepository};
use spot_core::value_objects::{CategoryId, SpotId};

use crate::mappers::stored_rating;
use crate::models::SpotModel;

use super::error::map_db_error;

/// PostgreSQL implementation of SpotRepository
#[derive(Clone)]
pub struct PgSpotRepository {
    pool: PgPool,
}

impl PgSpotRepository {
    /// Create a new PgSpotRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SpotRepository for PgSpotRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: SpotId) -> RepoResult<Option<Spot>> {
        let result = sqlx::query_as::<_, SpotModel>(
            r#"
            SELECT id, name, description, address, latitude, longitude, created_by,
                   review_count, average_rating, created_at, updated_at
            FROM spots
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Spot::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, category: Option<CategoryId>) -> RepoResult<Vec<Spot>> {
        let results = match category {
            Some(category_id) => {
                sqlx::query_as::<_, SpotModel>(
                    r#"
                    SELECT s.id, s.name, s.description, s.address, s.latitude, s.longitude,
                           s.created_by, s.review_count, s.average_rating, s.created_at, s.updated_at
                    FROM spots s
                    INNER JOIN spot_categories sc ON sc.spot_id = s.id
                    WHERE sc.category_id = $1
                    ORDER BY s.created_at DESC
                    "#,
                )
                .bind(category_id.into_inner())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, SpotModel>(
                    r#"
                    SELECT id, name, description, address, latitude, longitude, created_by,
                           review_count, average_rating, created_at, updated_at
                    FROM spots
                    ORDER BY created_at DESC
                    "#,
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Spot::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, spot: NewSpot) -> RepoResult<Spot> {
        let model = sqlx::query_as::<_, SpotModel>(
            r#"
            INSERT INTO spots (id, name, description, address, latitude, longitude, created_by,
                               review_count, average_rating, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 0, NULL, NOW(), NOW())
            RETURNING id, name, description, address, latitude, longitude, created_by,
                      review_count, average_rating, created_at, updated_at
            "#,
        )
        .bind(SpotId::generate().into_inner())
        .bind(&spot.name)
        .bind(&spot.description)
        .bind(&spot.address)
        .bind(spot.latitude)
        .bind(spot.longitude)
        .bind(spot.created_by.map(|id| id.into_inner()))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn update(&self, id: SpotId, changes: SpotChanges) -> RepoResult<Option<Spot>> {
        let result = sqlx::query_as::<_, SpotModel>(
            r#"
            UPDATE spots
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                address = COALESCE($4, address),
                latitude = COALESCE($5, latitude),
                longitude = COALESCE($6, longitude),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, address, latitude, longitude, created_by,
                      review_count, average_rating, created_at, updated_at
            "#,
        )
        .bind(id.into_inner())
        .bind(&changes.name)
        .bind(&changes.description)
        .bind(&changes.address)
        .bind(changes.latitude)
        .bind(changes.longitude)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Spot::from))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: SpotId) -> RepoResult<bool> {
        // reviews, reactions and category links cascade
        let result = sqlx::query("DELETE FROM spots WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn refresh_stats(&self, id: SpotId) -> RepoResult<Option<SpotStats>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Serializes concurrent recomputes of the same spot
        let locked = sqlx::query_scalar::<_, uuid::Uuid>(
            "SELECT id FROM spots WHERE id = $1 FOR UPDATE",
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if locked.is_none() {
            return Ok(None);
        }

        let ratings = sqlx::query_scalar::<_, i32>("SELECT rating FROM reviews WHERE spot_id = $1")
            .bind(id.into_inner())
            .fetch_all(&mut *tx)
            .await
            .map_err(map_db_error)?
            .into_iter()
            .map(stored_rating)
            .collect::<Result<Vec<_>, _>>()?;

        let stats = SpotStats::from_ratings(&ratings);

        sqlx::query(
            r#"
            UPDATE spots
            SET review_count = $2, average_rating = $3, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .bind(stats.review_count as i32)
        .bind(stats.average_rating.map(|avg| avg.value()))
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        debug!(review_count = stats.review_count, "Spot stats refreshed");
        Ok(Some(stats))
    }
}
