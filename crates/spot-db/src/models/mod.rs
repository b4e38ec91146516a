//! Database models - SQLx-compatible structs for PostgreSQL tables

mod category;
mod interaction;
mod review;
mod spot;
mod user;

pub use category::CategoryModel;
pub use interaction::{
    ReactionTallyModel, ReviewInteractionModel, StoredSpotModel, StoredSpotWithSpotModel,
};
pub use review::{ReviewImageModel, ReviewModel};
pub use spot::SpotModel;
pub use user::UserModel;
