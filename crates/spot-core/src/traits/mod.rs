//! Ports implemented by the persistence gateway

mod repositories;

pub use repositories::{
    CategoryRepository, HealthCheck, InteractionRepository, RepoResult, ReviewRepository,
    SpotRepository, StoredSpotRepository, UserRepository,
};
