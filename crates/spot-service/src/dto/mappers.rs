//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use spot_core::entities::{
    Category, Review, ReviewImage, ReviewInteraction, ReviewWithDetails, Spot, StoredSpot,
    StoredSpotCounts, StoredSpotWithSpot, UserProfile,
};

use super::responses::{
    CategoryResponse, ProfileResponse, ReviewImageResponse, ReviewInteractionResponse,
    ReviewResponse, SpotResponse, StoredSpotCountsResponse, StoredSpotResponse,
    StoredSpotWithSpotResponse, UserResponse,
};

// ============================================================================
// Spot Mappers
// ============================================================================

impl From<&Spot> for SpotResponse {
    fn from(spot: &Spot) -> Self {
        Self {
            id: spot.id,
            name: spot.name.clone(),
            description: spot.description.clone(),
            address: spot.address.clone(),
            latitude: spot.latitude,
            longitude: spot.longitude,
            created_by: spot.created_by,
            review_count: spot.review_count,
            average_rating: spot.average_rating,
            created_at: spot.created_at,
            updated_at: spot.updated_at,
        }
    }
}

impl From<Spot> for SpotResponse {
    fn from(spot: Spot) -> Self {
        Self::from(&spot)
    }
}

// ============================================================================
// Review Mappers
// ============================================================================

impl From<&ReviewImage> for ReviewImageResponse {
    fn from(image: &ReviewImage) -> Self {
        Self {
            id: image.id,
            review_id: image.review_id,
            image_url: image.image_url.clone(),
            caption: image.caption.clone(),
            created_at: image.created_at,
        }
    }
}

impl From<ReviewImage> for ReviewImageResponse {
    fn from(image: ReviewImage) -> Self {
        Self::from(&image)
    }
}

impl From<ReviewWithDetails> for ReviewResponse {
    fn from(details: ReviewWithDetails) -> Self {
        let ReviewWithDetails {
            review,
            images,
            user_name,
            user_avatar,
        } = details;

        Self {
            id: review.id,
            spot_id: review.spot_id,
            user_id: review.user_id,
            rating: review.rating.value(),
            content: review.content,
            like_count: review.counters.like_count,
            dislike_count: review.counters.dislike_count,
            created_at: review.created_at,
            updated_at: review.updated_at,
            review_images: images.into_iter().map(ReviewImageResponse::from).collect(),
            user_name,
            user_avatar,
        }
    }
}

/// Review without joined details
impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self::from(ReviewWithDetails {
            review,
            images: Vec::new(),
            user_name: None,
            user_avatar: None,
        })
    }
}

impl From<ReviewInteraction> for ReviewInteractionResponse {
    fn from(interaction: ReviewInteraction) -> Self {
        Self {
            review_id: interaction.review_id,
            user_id: interaction.user_id,
            is_liked: interaction.is_liked,
            created_at: interaction.created_at,
        }
    }
}

// ============================================================================
// Stored Spot Mappers
// ============================================================================

impl From<StoredSpot> for StoredSpotResponse {
    fn from(stored: StoredSpot) -> Self {
        Self {
            spot_id: stored.spot_id,
            user_id: stored.user_id,
            is_liked: stored.is_liked,
            created_at: stored.created_at,
        }
    }
}

impl From<StoredSpotWithSpot> for StoredSpotWithSpotResponse {
    fn from(row: StoredSpotWithSpot) -> Self {
        Self {
            stored: StoredSpotResponse::from(row.stored),
            spot: SpotResponse::from(row.spot),
        }
    }
}

impl From<StoredSpotCounts> for StoredSpotCountsResponse {
    fn from(counts: StoredSpotCounts) -> Self {
        Self {
            likes: counts.likes,
            dislikes: counts.dislikes,
        }
    }
}

// ============================================================================
// Category Mappers
// ============================================================================

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            created_at: category.created_at,
        }
    }
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<&UserProfile> for UserResponse {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.id,
            username: profile.username.clone(),
            full_name: profile.full_name.clone(),
            bio: profile.bio.clone(),
            profile_picture: profile.profile_picture.clone(),
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

impl From<&UserProfile> for ProfileResponse {
    fn from(profile: &UserProfile) -> Self {
        Self {
            username: profile.username.clone(),
            full_name: profile.full_name.clone(),
            bio: profile.bio.clone(),
            profile_picture: profile.profile_picture.clone(),
        }
    }
}
