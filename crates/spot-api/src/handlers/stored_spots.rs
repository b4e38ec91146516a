//! Stored spot handlers

use axum::extract::State;
use spot_core::SpotId;
use spot_service::dto::{
    StoredSpotCountsResponse, StoredSpotResponse, StoredSpotWithSpotResponse,
    ToggleStoredSpotRequest,
};
use spot_service::StoredSpotService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Like or dislike a spot; repeating the current choice clears it
///
/// POST /api/stored-spots
pub async fn toggle_stored_spot(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ToggleStoredSpotRequest>,
) -> ApiResult<ApiJson<Option<StoredSpotResponse>>> {
    let stored = StoredSpotService::new(state.service_context())
        .toggle(auth.user_id, request)
        .await?;
    Ok(ApiJson(stored))
}

/// GET /api/stored-spots
pub async fn list_stored_spots(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<Vec<StoredSpotWithSpotResponse>>> {
    let stored = StoredSpotService::new(state.service_context())
        .list_for_user(auth.user_id)
        .await?;
    Ok(ApiJson(stored))
}

/// GET /api/stored-spots/{spot_id}/status
pub async fn get_status(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(spot_id): IdPath<SpotId>,
) -> ApiResult<ApiJson<Option<StoredSpotResponse>>> {
    let stored = StoredSpotService::new(state.service_context())
        .status(spot_id, auth.user_id)
        .await?;
    Ok(ApiJson(stored))
}

/// GET /api/stored-spots/{spot_id}/counts
pub async fn get_counts(
    State(state): State<AppState>,
    IdPath(spot_id): IdPath<SpotId>,
) -> ApiResult<ApiJson<StoredSpotCountsResponse>> {
    let counts = StoredSpotService::new(state.service_context())
        .counts(spot_id)
        .await?;
    Ok(ApiJson(counts))
}
