//! Domain entities - core business objects

mod category;
mod interaction;
mod review;
mod spot;
mod user;

pub use category::Category;
pub use interaction::{
    ReviewInteraction, ReviewToggle, StoredSpot, StoredSpotCounts, StoredSpotToggle,
    StoredSpotWithSpot,
};
pub use review::{NewReview, NewReviewImage, Review, ReviewImage, ReviewWithDetails};
pub use spot::{NewSpot, Spot, SpotChanges};
pub use user::{ProfileChanges, UserProfile};
