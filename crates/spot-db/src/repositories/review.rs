//! PostgreSQL implementation of ReviewRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use spot_core::entities::{NewReview, Review, ReviewImage};
use spot_core::traits::{RepoResult, ReviewRepository};
use spot_core::value_objects::{ImageId, Rating, ReviewCounters, ReviewId, SpotId};

use crate::mappers::reviews_from_models;
use crate::models::{ReviewImageModel, ReviewModel};

use super::error::map_db_error;

/// PostgreSQL implementation of ReviewRepository
#[derive(Clone)]
pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    /// Create a new PgReviewRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ReviewId) -> RepoResult<Option<Review>> {
        let result = sqlx::query_as::<_, ReviewModel>(
            r#"
            SELECT id, spot_id, user_id, rating, content, like_count, dislike_count,
                   created_at, updated_at
            FROM reviews
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Review::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Review>> {
        let results = sqlx::query_as::<_, ReviewModel>(
            r#"
            SELECT id, spot_id, user_id, rating, content, like_count, dislike_count,
                   created_at, updated_at
            FROM reviews
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        reviews_from_models(results)
    }

    #[instrument(skip(self))]
    async fn find_by_spot(&self, spot_id: SpotId) -> RepoResult<Vec<Review>> {
        let results = sqlx::query_as::<_, ReviewModel>(
            r#"
            SELECT id, spot_id, user_id, rating, content, like_count, dislike_count,
                   created_at, updated_at
            FROM reviews
            WHERE spot_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(spot_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        reviews_from_models(results)
    }

    #[instrument(skip(self, review), fields(spot_id = %review.spot_id))]
    async fn create(&self, review: NewReview) -> RepoResult<Review> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let model = sqlx::query_as::<_, ReviewModel>(
            r#"
            INSERT INTO reviews (id, spot_id, user_id, rating, content, like_count, dislike_count,
                                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, 0, 0, NOW(), NOW())
            RETURNING id, spot_id, user_id, rating, content, like_count, dislike_count,
                      created_at, updated_at
            "#,
        )
        .bind(ReviewId::generate().into_inner())
        .bind(review.spot_id.into_inner())
        .bind(review.user_id.map(|id| id.into_inner()))
        .bind(i32::from(review.rating.value()))
        .bind(&review.content)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        for image in &review.images {
            sqlx::query(
                r#"
                INSERT INTO review_images (id, review_id, image_url, caption, created_at)
                VALUES ($1, $2, $3, $4, NOW())
                "#,
            )
            .bind(ImageId::generate().into_inner())
            .bind(model.id)
            .bind(&image.image_url)
            .bind(&image.caption)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Review::try_from(model)
    }

    #[instrument(skip(self, content))]
    async fn update(&self, id: ReviewId, rating: Rating, content: String) -> RepoResult<Option<Review>> {
        let result = sqlx::query_as::<_, ReviewModel>(
            r#"
            UPDATE reviews
            SET rating = $2, content = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, spot_id, user_id, rating, content, like_count, dislike_count,
                      created_at, updated_at
            "#,
        )
        .bind(id.into_inner())
        .bind(i32::from(rating.value()))
        .bind(&content)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Review::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ReviewId) -> RepoResult<Option<Review>> {
        // images and interactions cascade
        let result = sqlx::query_as::<_, ReviewModel>(
            r#"
            DELETE FROM reviews
            WHERE id = $1
            RETURNING id, spot_id, user_id, rating, content, like_count, dislike_count,
                      created_at, updated_at
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Review::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn set_counters(&self, id: ReviewId, counters: ReviewCounters) -> RepoResult<Option<Review>> {
        let result = sqlx::query_as::<_, ReviewModel>(
            r#"
            UPDATE reviews
            SET like_count = GREATEST(0, $2), dislike_count = GREATEST(0, $3)
            WHERE id = $1
            RETURNING id, spot_id, user_id, rating, content, like_count, dislike_count,
                      created_at, updated_at
            "#,
        )
        .bind(id.into_inner())
        .bind(i32::try_from(counters.like_count).unwrap_or(i32::MAX))
        .bind(i32::try_from(counters.dislike_count).unwrap_or(i32::MAX))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Review::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_images(&self, review_id: ReviewId) -> RepoResult<Vec<ReviewImage>> {
        let results = sqlx::query_as::<_, ReviewImageModel>(
            r#"
            SELECT id, review_id, image_url, caption, created_at
            FROM review_images
            WHERE review_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(review_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ReviewImage::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_images_by_spot(&self, spot_id: SpotId) -> RepoResult<Vec<ReviewImage>> {
        let results = sqlx::query_as::<_, ReviewImageModel>(
            r#"
            SELECT ri.id, ri.review_id, ri.image_url, ri.caption, ri.created_at
            FROM review_images ri
            INNER JOIN reviews r ON r.id = ri.review_id
            WHERE r.spot_id = $1
            ORDER BY ri.created_at DESC
            "#,
        )
        .bind(spot_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ReviewImage::from).collect())
    }
}
