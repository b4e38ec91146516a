//! Health check handlers
//!
//! Endpoints for liveness and readiness checks.

use axum::{extract::State, http::StatusCode, Json};
use spot_service::dto::{ApiResponse, HealthResponse, ReadinessResponse};
use spot_service::HealthService;

use crate::response::ApiJson;
use crate::state::AppState;

/// Basic health check (liveness)
///
/// GET /api/health
pub async fn health_check() -> ApiJson<HealthResponse> {
    ApiJson(HealthResponse::healthy())
}

/// Readiness check with storage health
///
/// GET /api/health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<ReadinessResponse>>) {
    let response = HealthService::new(state.service_context()).readiness().await;

    if response.is_ready() {
        (StatusCode::OK, Json(ApiResponse::new(response)))
    } else {
        let mut body = ApiResponse::new(response);
        body.success = false;
        (StatusCode::SERVICE_UNAVAILABLE, Json(body))
    }
}
