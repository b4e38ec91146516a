//! # spot-db
//!
//! Persistence gateway implementing the `spot-core` repository traits.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - PostgreSQL repository implementations
//! - An in-memory store implementing every repository trait, used by tests
//!   and by the `memory` storage backend
//!
//! ## Usage
//!
//! ```rust,ignore
//! use spot_common::AppConfig;
//! use spot_db::pool::{create_pool, DatabaseConfig};
//! use spot_db::repositories::PgSpotRepository;
//! use spot_core::traits::SpotRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let app = AppConfig::from_env()?;
//!     let database = app.database.ok_or("DATABASE_URL is not set")?;
//!     let pool = create_pool(&DatabaseConfig::from(&database)).await?;
//!     let spots = PgSpotRepository::new(pool);
//!
//!     let all = spots.list(None).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::InMemoryStore;
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{
    PgCategoryRepository, PgHealthCheck, PgInteractionRepository, PgReviewRepository,
    PgSpotRepository, PgStoredSpotRepository, PgUserRepository,
};
