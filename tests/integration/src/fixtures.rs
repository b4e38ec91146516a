//! Test fixtures and data generators
//!
//! Provides reusable request bodies and response shapes for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create spot request
#[derive(Debug, Serialize)]
pub struct CreateSpotRequest {
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl CreateSpotRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Spot {suffix}"),
            description: Some("A quiet place".to_string()),
            address: Some("1 Test Street".to_string()),
            latitude: 37.5665,
            longitude: 126.978,
        }
    }
}

/// Review image body
#[derive(Debug, Serialize)]
pub struct ReviewImageRequest {
    pub url: String,
    pub caption: Option<String>,
}

/// Create review request
#[derive(Debug, Serialize)]
pub struct CreateReviewRequest {
    pub spot_id: Uuid,
    pub rating: i64,
    pub content: String,
    pub images: Vec<ReviewImageRequest>,
}

impl CreateReviewRequest {
    pub fn new(spot_id: Uuid, rating: i64) -> Self {
        Self {
            spot_id,
            rating,
            content: format!("Review #{}", unique_suffix()),
            images: Vec::new(),
        }
    }

    pub fn with_image(mut self, url: &str) -> Self {
        self.images.push(ReviewImageRequest {
            url: url.to_string(),
            caption: None,
        });
        self
    }
}

/// Update review request
#[derive(Debug, Serialize)]
pub struct UpdateReviewRequest {
    pub rating: i64,
    pub content: String,
}

/// Stored spot toggle request
#[derive(Debug, Serialize)]
pub struct ToggleStoredSpotRequest {
    pub spot_id: Uuid,
    pub is_liked: bool,
}

/// Spot response
#[derive(Debug, Deserialize)]
pub struct SpotResponse {
    pub id: Uuid,
    pub name: String,
    pub review_count: u32,
    pub average_rating: Option<f64>,
}

/// Review image response
#[derive(Debug, Deserialize)]
pub struct ReviewImageResponse {
    pub id: Uuid,
    pub review_id: Uuid,
    pub image_url: String,
}

/// Review response
#[derive(Debug, Deserialize)]
pub struct ReviewResponse {
    pub id: Uuid,
    pub spot_id: Uuid,
    pub user_id: Option<Uuid>,
    pub rating: u8,
    pub content: String,
    pub like_count: u32,
    pub dislike_count: u32,
    pub review_images: Vec<ReviewImageResponse>,
    pub user_name: Option<String>,
}

/// Review interaction response
#[derive(Debug, Deserialize)]
pub struct ReviewInteractionResponse {
    pub review_id: Uuid,
    pub user_id: Uuid,
    pub is_liked: bool,
}

/// Stored spot response
#[derive(Debug, Deserialize)]
pub struct StoredSpotResponse {
    pub spot_id: Uuid,
    pub user_id: Uuid,
    pub is_liked: bool,
}

/// Stored spot joined with its spot
#[derive(Debug, Deserialize)]
pub struct StoredSpotWithSpotResponse {
    pub spot_id: Uuid,
    pub is_liked: bool,
    pub spot: SpotResponse,
}

/// Stored spot counts
#[derive(Debug, Deserialize)]
pub struct StoredSpotCountsResponse {
    pub likes: u64,
    pub dislikes: u64,
}

/// Category response
#[derive(Debug, Deserialize)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
}

/// Profile response
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub username: Option<String>,
    pub bio: Option<String>,
}

/// Full user row
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: Option<String>,
}
