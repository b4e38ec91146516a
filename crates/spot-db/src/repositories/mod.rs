//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in spot-core.
//! Each repository handles database operations for a specific domain entity.

mod category;
mod error;
mod health;
mod interaction;
mod review;
mod spot;
mod stored_spot;
mod user;

pub use category::PgCategoryRepository;
pub use health::PgHealthCheck;
pub use interaction::PgInteractionRepository;
pub use review::PgReviewRepository;
pub use spot::PgSpotRepository;
pub use stored_spot::PgStoredSpotRepository;
pub use user::PgUserRepository;
