//! # spot-service
//!
//! Application layer containing the aggregate consistency engine, the
//! interaction toggles, the CRUD use cases, and the request/response DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AggregateService, CategoryService, HealthService, InteractionService, ReviewService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, SpotService,
    StoredSpotService, UserService,
};
