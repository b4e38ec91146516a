//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{CategoryId, ReviewId, SpotId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Spot not found: {0}")]
    SpotNotFound(SpotId),

    #[error("Review not found: {0}")]
    ReviewNotFound(ReviewId),

    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(i64),

    #[error("Coordinates out of range: ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("Username already taken")]
    UsernameTaken,

    #[error("Category name already exists")]
    CategoryNameTaken,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not review author")]
    NotReviewAuthor,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("{0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::SpotNotFound(_) => "UNKNOWN_SPOT",
            Self::ReviewNotFound(_) => "UNKNOWN_REVIEW",
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",
            Self::UserNotFound(_) => "UNKNOWN_USER",

            // Validation
            Self::InvalidRating(_) => "INVALID_RATING",
            Self::InvalidCoordinates { .. } => "INVALID_COORDINATES",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::CategoryNameTaken => "CATEGORY_NAME_TAKEN",

            // Authorization
            Self::NotReviewAuthor => "NOT_REVIEW_AUTHOR",

            // Infrastructure
            Self::Upstream(_) => "UPSTREAM_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::SpotNotFound(_)
                | Self::ReviewNotFound(_)
                | Self::CategoryNotFound(_)
                | Self::UserNotFound(_)
        )
    }

    /// Check if this is a validation error
    ///
    /// Duplicate usernames and category names surface as bad input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidRating(_)
                | Self::InvalidCoordinates { .. }
                | Self::UsernameTaken
                | Self::CategoryNameTaken
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotReviewAuthor)
    }
}
