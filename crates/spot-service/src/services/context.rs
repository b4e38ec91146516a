//! Service context - dependency container for services
//!
//! Holds the persistence gateway: one trait object per repository plus a
//! storage health check. Services borrow the context and stay stateless.

use std::sync::Arc;

use spot_core::traits::{
    CategoryRepository, HealthCheck, InteractionRepository, ReviewRepository, SpotRepository,
    StoredSpotRepository, UserRepository,
};
use spot_db::{
    InMemoryStore, PgCategoryRepository, PgHealthCheck, PgInteractionRepository, PgPool,
    PgReviewRepository, PgSpotRepository, PgStoredSpotRepository, PgUserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cloning is cheap; every repository sits behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    spot_repo: Arc<dyn SpotRepository>,
    review_repo: Arc<dyn ReviewRepository>,
    interaction_repo: Arc<dyn InteractionRepository>,
    stored_spot_repo: Arc<dyn StoredSpotRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    user_repo: Arc<dyn UserRepository>,
    health_check: Arc<dyn HealthCheck>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        spot_repo: Arc<dyn SpotRepository>,
        review_repo: Arc<dyn ReviewRepository>,
        interaction_repo: Arc<dyn InteractionRepository>,
        stored_spot_repo: Arc<dyn StoredSpotRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        user_repo: Arc<dyn UserRepository>,
        health_check: Arc<dyn HealthCheck>,
    ) -> Self {
        Self {
            spot_repo,
            review_repo,
            interaction_repo,
            stored_spot_repo,
            category_repo,
            user_repo,
            health_check,
        }
    }

    /// Context backed by PostgreSQL repositories sharing one pool
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgSpotRepository::new(pool.clone())),
            Arc::new(PgReviewRepository::new(pool.clone())),
            Arc::new(PgInteractionRepository::new(pool.clone())),
            Arc::new(PgStoredSpotRepository::new(pool.clone())),
            Arc::new(PgCategoryRepository::new(pool.clone())),
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgHealthCheck::new(pool)),
        )
    }

    /// Context backed by a process-local store
    pub fn in_memory(store: InMemoryStore) -> Self {
        let store = Arc::new(store);
        Self::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store,
        )
    }

    // === Repositories ===

    /// Get the spot repository
    pub fn spot_repo(&self) -> &dyn SpotRepository {
        self.spot_repo.as_ref()
    }

    /// Get the review repository
    pub fn review_repo(&self) -> &dyn ReviewRepository {
        self.review_repo.as_ref()
    }

    /// Get the review interaction repository
    pub fn interaction_repo(&self) -> &dyn InteractionRepository {
        self.interaction_repo.as_ref()
    }

    /// Get the stored spot repository
    pub fn stored_spot_repo(&self) -> &dyn StoredSpotRepository {
        self.stored_spot_repo.as_ref()
    }

    /// Get the category repository
    pub fn category_repo(&self) -> &dyn CategoryRepository {
        self.category_repo.as_ref()
    }

    /// Get the user profile repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the storage health check
    pub fn health_check(&self) -> &dyn HealthCheck {
        self.health_check.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext from individual repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    spot_repo: Option<Arc<dyn SpotRepository>>,
    review_repo: Option<Arc<dyn ReviewRepository>>,
    interaction_repo: Option<Arc<dyn InteractionRepository>>,
    stored_spot_repo: Option<Arc<dyn StoredSpotRepository>>,
    category_repo: Option<Arc<dyn CategoryRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    health_check: Option<Arc<dyn HealthCheck>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spot_repo(mut self, repo: Arc<dyn SpotRepository>) -> Self {
        self.spot_repo = Some(repo);
        self
    }

    pub fn review_repo(mut self, repo: Arc<dyn ReviewRepository>) -> Self {
        self.review_repo = Some(repo);
        self
    }

    pub fn interaction_repo(mut self, repo: Arc<dyn InteractionRepository>) -> Self {
        self.interaction_repo = Some(repo);
        self
    }

    pub fn stored_spot_repo(mut self, repo: Arc<dyn StoredSpotRepository>) -> Self {
        self.stored_spot_repo = Some(repo);
        self
    }

    pub fn category_repo(mut self, repo: Arc<dyn CategoryRepository>) -> Self {
        self.category_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn health_check(mut self, check: Arc<dyn HealthCheck>) -> Self {
        self.health_check = Some(check);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.spot_repo.ok_or_else(|| ServiceError::validation("spot_repo is required"))?,
            self.review_repo.ok_or_else(|| ServiceError::validation("review_repo is required"))?,
            self.interaction_repo
                .ok_or_else(|| ServiceError::validation("interaction_repo is required"))?,
            self.stored_spot_repo
                .ok_or_else(|| ServiceError::validation("stored_spot_repo is required"))?,
            self.category_repo.ok_or_else(|| ServiceError::validation("category_repo is required"))?,
            self.user_repo.ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.health_check.ok_or_else(|| ServiceError::validation("health_check is required"))?,
        ))
    }
}
