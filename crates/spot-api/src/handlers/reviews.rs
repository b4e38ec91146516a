//! Review handlers
//!
//! Review CRUD plus like/dislike interactions.

use axum::extract::State;
use spot_core::{ReviewId, SpotId};
use spot_service::dto::{
    CreateReviewRequest, ReviewInteractionResponse, ReviewResponse, UpdateReviewRequest,
};
use spot_service::{InteractionService, ReviewService};

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiJson, ApiMessage, ApiResult, Created};
use crate::state::AppState;

/// List all reviews, newest first
///
/// GET /api/reviews
pub async fn list_reviews(State(state): State<AppState>) -> ApiResult<ApiJson<Vec<ReviewResponse>>> {
    let reviews = ReviewService::new(state.service_context()).list_reviews().await?;
    Ok(ApiJson(reviews))
}

/// Get review by ID
///
/// GET /api/reviews/{id}
pub async fn get_review(
    State(state): State<AppState>,
    IdPath(review_id): IdPath<ReviewId>,
) -> ApiResult<ApiJson<ReviewResponse>> {
    let review = ReviewService::new(state.service_context())
        .get_review(review_id)
        .await?;
    Ok(ApiJson(review))
}

/// Reviews of one spot
///
/// GET /api/reviews/spot/{spot_id}
pub async fn get_spot_reviews(
    State(state): State<AppState>,
    IdPath(spot_id): IdPath<SpotId>,
) -> ApiResult<ApiJson<Vec<ReviewResponse>>> {
    let reviews = ReviewService::new(state.service_context())
        .get_spot_reviews(spot_id)
        .await?;
    Ok(ApiJson(reviews))
}

/// Create review
///
/// POST /api/reviews
pub async fn create_review(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateReviewRequest>,
) -> ApiResult<Created<ApiJson<ReviewResponse>>> {
    let review = ReviewService::new(state.service_context())
        .create_review(auth.user_id, request)
        .await?;
    Ok(Created(ApiJson(review)))
}

/// Update review (author only)
///
/// PUT /api/reviews/{id}
pub async fn update_review(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(review_id): IdPath<ReviewId>,
    ValidatedJson(request): ValidatedJson<UpdateReviewRequest>,
) -> ApiResult<ApiJson<ReviewResponse>> {
    let review = ReviewService::new(state.service_context())
        .update_review(review_id, auth.user_id, request)
        .await?;
    Ok(ApiJson(review))
}

/// Delete review (author only)
///
/// DELETE /api/reviews/{id}
pub async fn delete_review(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(review_id): IdPath<ReviewId>,
) -> ApiResult<ApiMessage> {
    ReviewService::new(state.service_context())
        .delete_review(review_id, auth.user_id)
        .await?;
    Ok(ApiMessage("Review deleted successfully"))
}

/// Toggle like on a review
///
/// POST /api/reviews/{id}/like
pub async fn like_review(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(review_id): IdPath<ReviewId>,
) -> ApiResult<ApiJson<ReviewResponse>> {
    let review = InteractionService::new(state.service_context())
        .toggle_like(review_id, auth.user_id)
        .await?;
    Ok(ApiJson(review))
}

/// Toggle dislike on a review
///
/// POST /api/reviews/{id}/dislike
pub async fn dislike_review(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(review_id): IdPath<ReviewId>,
) -> ApiResult<ApiJson<ReviewResponse>> {
    let review = InteractionService::new(state.service_context())
        .toggle_dislike(review_id, auth.user_id)
        .await?;
    Ok(ApiJson(review))
}

/// Caller's interaction with a review, `null` when none
///
/// GET /api/reviews/{id}/interaction
pub async fn get_interaction(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(review_id): IdPath<ReviewId>,
) -> ApiResult<ApiJson<Option<ReviewInteractionResponse>>> {
    let interaction = InteractionService::new(state.service_context())
        .user_interaction(review_id, auth.user_id)
        .await?;
    Ok(ApiJson(interaction))
}

/// Caller's interactions with every review on a spot
///
/// GET /api/reviews/spot/{spot_id}/interactions
pub async fn get_spot_interactions(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(spot_id): IdPath<SpotId>,
) -> ApiResult<ApiJson<Vec<ReviewInteractionResponse>>> {
    let interactions = InteractionService::new(state.service_context())
        .user_interactions_for_spot(auth.user_id, spot_id)
        .await?;
    Ok(ApiJson(interactions))
}
