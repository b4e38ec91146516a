//! Category handlers

use axum::extract::State;
use spot_core::CategoryId;
use spot_service::dto::{CategoryResponse, CreateCategoryRequest};
use spot_service::CategoryService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiJson, ApiMessage, ApiResult};
use crate::state::AppState;

/// List categories ordered by name
///
/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<ApiJson<Vec<CategoryResponse>>> {
    let categories = CategoryService::new(state.service_context())
        .list_categories()
        .await?;
    Ok(ApiJson(categories))
}

/// Create category
///
/// POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCategoryRequest>,
) -> ApiResult<ApiJson<CategoryResponse>> {
    let category = CategoryService::new(state.service_context())
        .create_category(request)
        .await?;
    Ok(ApiJson(category))
}

/// Delete category
///
/// DELETE /api/categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(category_id): IdPath<CategoryId>,
) -> ApiResult<ApiMessage> {
    CategoryService::new(state.service_context())
        .delete_category(category_id)
        .await?;
    Ok(ApiMessage("Category deleted successfully"))
}
