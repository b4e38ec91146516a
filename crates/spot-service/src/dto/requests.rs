//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Ratings are range-checked by the domain `Rating` type rather than here so the
//! error carries the rejected value.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Spot Requests
// ============================================================================

/// Create spot request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSpotRequest {
    #[validate(length(min = 1, max = 200, message = "Spot name must be 1-200 characters"))]
    pub name: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 500, message = "Address must be at most 500 characters"))]
    pub address: Option<String>,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: f64,
}

/// Update spot request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSpotRequest {
    #[validate(length(min = 1, max = 200, message = "Spot name must be 1-200 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 500, message = "Address must be at most 500 characters"))]
    pub address: Option<String>,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: Option<f64>,
}

/// Spot listing filter (`?category_id=`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpotListQuery {
    pub category_id: Option<Uuid>,
}

/// Replace a spot's categories
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetSpotCategoriesRequest {
    #[validate(length(max = 50, message = "At most 50 categories per spot"))]
    pub category_ids: Vec<Uuid>,
}

// ============================================================================
// Review Requests
// ============================================================================

/// Image attached to a new review
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReviewImageRequest {
    #[serde(alias = "image_url")]
    #[validate(length(min = 1, max = 2048, message = "Image url must be 1-2048 characters"))]
    pub url: String,

    #[validate(length(max = 500, message = "Caption must be at most 500 characters"))]
    pub caption: Option<String>,
}

/// Create review request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReviewRequest {
    pub spot_id: Uuid,

    pub rating: i64,

    #[validate(length(min = 1, max = 5000, message = "Review content must be 1-5000 characters"))]
    pub content: String,

    #[serde(default)]
    #[validate(nested)]
    pub images: Vec<ReviewImageRequest>,
}

/// Update review request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateReviewRequest {
    pub rating: i64,

    #[validate(length(min = 1, max = 5000, message = "Review content must be 1-5000 characters"))]
    pub content: String,
}

// ============================================================================
// Stored Spot Requests
// ============================================================================

fn default_liked() -> bool {
    true
}

/// Like or dislike a spot; repeating the same choice clears it
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ToggleStoredSpotRequest {
    pub spot_id: Uuid,

    #[serde(default = "default_liked")]
    pub is_liked: bool,
}

// ============================================================================
// Category Requests
// ============================================================================

/// Create category request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Category name must be 1-100 characters"))]
    pub name: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Update the caller's profile
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: Option<String>,

    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,
}
