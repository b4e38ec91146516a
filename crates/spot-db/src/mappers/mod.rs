//! Model to entity mappers
//!
//! `From<Model> for Entity` where every column maps cleanly, `TryFrom` where a
//! stored value has to pass a domain check (review ratings).

mod category;
mod interaction;
mod review;
mod spot;
mod user;

pub use review::{reviews_from_models, stored_rating};
