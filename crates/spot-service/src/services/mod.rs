//! Business logic services
//!
//! Each service borrows the [`ServiceContext`] and orchestrates repository
//! calls; derived values are always recomputed or atomically toggled by the
//! persistence gateway.

pub mod aggregate;
pub mod category;
pub mod context;
pub mod error;
pub mod health;
pub mod interaction;
pub mod review;
pub mod spot;
pub mod stored_spot;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

pub use aggregate::AggregateService;
pub use category::CategoryService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use health::HealthService;
pub use interaction::InteractionService;
pub use review::ReviewService;
pub use spot::SpotService;
pub use stored_spot::StoredSpotService;
pub use user::UserService;
