//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Every body is wrapped
//! in [`ApiResponse`].

use chrono::{DateTime, Utc};
use serde::Serialize;
use spot_core::{AverageRating, CategoryId, ImageId, ReviewId, SpotId, UserId};

// ============================================================================
// Common Response Types
// ============================================================================

/// Response envelope: `{ success, data?, error?, message? }`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying data
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }
}

impl ApiResponse<()> {
    /// Successful response carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            error: None,
            message: Some(message.into()),
        }
    }

    /// Failed response
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }
}

// ============================================================================
// Spot Responses
// ============================================================================

/// Spot with its derived review statistics
#[derive(Debug, Clone, Serialize)]
pub struct SpotResponse {
    pub id: SpotId,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub created_by: Option<UserId>,
    pub review_count: u32,
    /// One fractional digit; `null` while the spot has no reviews
    pub average_rating: Option<AverageRating>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Review Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ReviewImageResponse {
    pub id: ImageId,
    pub review_id: ReviewId,
    pub image_url: String,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Review with images and author display fields
#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponse {
    pub id: ReviewId,
    pub spot_id: SpotId,
    pub user_id: Option<UserId>,
    pub rating: u8,
    pub content: String,
    pub like_count: u32,
    pub dislike_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub review_images: Vec<ReviewImageResponse>,
    pub user_name: Option<String>,
    pub user_avatar: Option<String>,
}

/// A user's reaction on a review
#[derive(Debug, Clone, Serialize)]
pub struct ReviewInteractionResponse {
    pub review_id: ReviewId,
    pub user_id: UserId,
    pub is_liked: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Stored Spot Responses
// ============================================================================

/// A user's reaction on a spot
#[derive(Debug, Clone, Serialize)]
pub struct StoredSpotResponse {
    pub spot_id: SpotId,
    pub user_id: UserId,
    pub is_liked: bool,
    pub created_at: DateTime<Utc>,
}

/// Stored spot row joined with its spot
#[derive(Debug, Clone, Serialize)]
pub struct StoredSpotWithSpotResponse {
    #[serde(flatten)]
    pub stored: StoredSpotResponse,
    pub spot: SpotResponse,
}

/// Like/dislike tallies computed on read
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StoredSpotCountsResponse {
    pub likes: u64,
    pub dislikes: u64,
}

// ============================================================================
// Category Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: CategoryId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// User Responses
// ============================================================================

/// Full profile row
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public-facing profile fields
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub storage: String,
}

impl ReadinessResponse {
    /// Build from the storage check outcome
    pub fn from_storage(storage_ok: bool) -> Self {
        Self {
            status: if storage_ok { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                storage: if storage_ok { "ok" } else { "unavailable" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
