//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod categories;
pub mod health;
pub mod reviews;
pub mod spots;
pub mod stored_spots;
pub mod users;
