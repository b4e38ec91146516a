//! User handlers
//!
//! The caller's own profile row; created on first access.

use axum::extract::State;
use spot_service::dto::{ProfileResponse, UpdateProfileRequest, UserResponse};
use spot_service::UserService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Get the caller's full user row
///
/// GET /api/users
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<UserResponse>> {
    let user = UserService::new(state.service_context())
        .get_user(auth.user_id)
        .await?;
    Ok(ApiJson(user))
}

/// Get the caller's public profile
///
/// GET /api/users/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<ProfileResponse>> {
    let profile = UserService::new(state.service_context())
        .get_profile(auth.user_id)
        .await?;
    Ok(ApiJson(profile))
}

/// Update the caller's profile
///
/// PUT /api/users/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<ApiJson<ProfileResponse>> {
    let profile = UserService::new(state.service_context())
        .update_profile(auth.user_id, request)
        .await?;
    Ok(ApiJson(profile))
}
