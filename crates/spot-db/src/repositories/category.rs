//! PostgreSQL implementation of CategoryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use spot_core::entities::Category;
use spot_core::error::DomainError;
use spot_core::traits::{CategoryRepository, RepoResult};
use spot_core::value_objects::{CategoryId, SpotId};

use crate::models::CategoryModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of CategoryRepository
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    /// Create a new PgCategoryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Category>> {
        let results = sqlx::query_as::<_, CategoryModel>(
            "SELECT id, name, created_at FROM categories ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Category::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let result = sqlx::query_as::<_, CategoryModel>(
            "SELECT id, name, created_at FROM categories WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Category::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, name: &str) -> RepoResult<Category> {
        let model = sqlx::query_as::<_, CategoryModel>(
            r#"
            INSERT INTO categories (id, name, created_at)
            VALUES ($1, $2, NOW())
            RETURNING id, name, created_at
            "#,
        )
        .bind(CategoryId::generate().into_inner())
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::CategoryNameTaken))?;

        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: CategoryId) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn find_by_spot(&self, spot_id: SpotId) -> RepoResult<Vec<Category>> {
        let results = sqlx::query_as::<_, CategoryModel>(
            r#"
            SELECT c.id, c.name, c.created_at
            FROM categories c
            INNER JOIN spot_categories sc ON sc.category_id = c.id
            WHERE sc.spot_id = $1
            ORDER BY c.name
            "#,
        )
        .bind(spot_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Category::from).collect())
    }

    #[instrument(skip(self))]
    async fn assign_to_spot(&self, spot_id: SpotId, categories: &[CategoryId]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM spot_categories WHERE spot_id = $1")
            .bind(spot_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        for category_id in categories {
            sqlx::query(
                r#"
                INSERT INTO spot_categories (spot_id, category_id)
                VALUES ($1, $2)
                ON CONFLICT (spot_id, category_id) DO NOTHING
                "#,
            )
            .bind(spot_id.into_inner())
            .bind(category_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
