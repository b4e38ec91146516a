//! Spot handlers
//!
//! Spot CRUD, spot images and spot categories.

use axum::extract::{Query, State};
use spot_core::SpotId;
use spot_service::dto::{
    CategoryResponse, CreateSpotRequest, ReviewImageResponse, SetSpotCategoriesRequest,
    SpotListQuery, SpotResponse, UpdateSpotRequest,
};
use spot_service::SpotService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiError, ApiJson, ApiMessage, ApiResult, Created};
use crate::state::AppState;

/// List spots
///
/// GET /api/spots?category_id=
pub async fn list_spots(
    State(state): State<AppState>,
    query: Result<Query<SpotListQuery>, axum::extract::rejection::QueryRejection>,
) -> ApiResult<ApiJson<Vec<SpotResponse>>> {
    let Query(query) = query.map_err(|e| ApiError::invalid_query(e.body_text()))?;
    let spots = SpotService::new(state.service_context()).list_spots(query).await?;
    Ok(ApiJson(spots))
}

/// Get spot by ID
///
/// GET /api/spots/{id}
pub async fn get_spot(
    State(state): State<AppState>,
    IdPath(spot_id): IdPath<SpotId>,
) -> ApiResult<ApiJson<SpotResponse>> {
    let spot = SpotService::new(state.service_context()).get_spot(spot_id).await?;
    Ok(ApiJson(spot))
}

/// Create spot
///
/// POST /api/spots
pub async fn create_spot(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateSpotRequest>,
) -> ApiResult<Created<ApiJson<SpotResponse>>> {
    let spot = SpotService::new(state.service_context())
        .create_spot(auth.user_id, request)
        .await?;
    Ok(Created(ApiJson(spot)))
}

/// Update spot
///
/// PUT /api/spots/{id}
pub async fn update_spot(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(spot_id): IdPath<SpotId>,
    ValidatedJson(request): ValidatedJson<UpdateSpotRequest>,
) -> ApiResult<ApiJson<SpotResponse>> {
    let spot = SpotService::new(state.service_context())
        .update_spot(spot_id, request)
        .await?;
    Ok(ApiJson(spot))
}

/// Delete spot
///
/// DELETE /api/spots/{id}
pub async fn delete_spot(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(spot_id): IdPath<SpotId>,
) -> ApiResult<ApiMessage> {
    SpotService::new(state.service_context()).delete_spot(spot_id).await?;
    Ok(ApiMessage("Spot deleted successfully"))
}

/// Images of all reviews on a spot
///
/// GET /api/spots/{id}/images
pub async fn get_spot_images(
    State(state): State<AppState>,
    IdPath(spot_id): IdPath<SpotId>,
) -> ApiResult<ApiJson<Vec<ReviewImageResponse>>> {
    let images = SpotService::new(state.service_context())
        .get_spot_images(spot_id)
        .await?;
    Ok(ApiJson(images))
}

/// Categories of a spot
///
/// GET /api/spots/{id}/categories
pub async fn get_spot_categories(
    State(state): State<AppState>,
    IdPath(spot_id): IdPath<SpotId>,
) -> ApiResult<ApiJson<Vec<CategoryResponse>>> {
    let categories = SpotService::new(state.service_context())
        .get_spot_categories(spot_id)
        .await?;
    Ok(ApiJson(categories))
}

/// Replace the categories of a spot
///
/// PUT /api/spots/{id}/categories
pub async fn set_spot_categories(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(spot_id): IdPath<SpotId>,
    ValidatedJson(request): ValidatedJson<SetSpotCategoriesRequest>,
) -> ApiResult<ApiJson<Vec<CategoryResponse>>> {
    let categories = SpotService::new(state.service_context())
        .set_spot_categories(spot_id, request)
        .await?;
    Ok(ApiJson(categories))
}
