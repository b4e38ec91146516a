//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateCategoryRequest, CreateReviewRequest, CreateSpotRequest, ReviewImageRequest,
    SetSpotCategoriesRequest, SpotListQuery, ToggleStoredSpotRequest, UpdateProfileRequest,
    UpdateReviewRequest, UpdateSpotRequest,
};

pub use responses::{
    ApiResponse, CategoryResponse, HealthChecks, HealthResponse, ProfileResponse,
    ReadinessResponse, ReviewImageResponse, ReviewInteractionResponse, ReviewResponse,
    SpotResponse, StoredSpotCountsResponse, StoredSpotResponse, StoredSpotWithSpotResponse,
    UserResponse,
};
