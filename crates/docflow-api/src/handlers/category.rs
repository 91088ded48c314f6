//! Category handlers.

use axum::Json;
use axum::extract::{Path, State};

use docflow_core::types::CategoryId;

use super::parse_id;
use crate::dto::request::CreateCategoryRequest;
use crate::dto::response::{CategoryResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let category = state.category_service.create(&auth, &req.name).await?;
    Ok(Json(category.into()))
}

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let categories = state.category_service.list(&auth).await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

/// DELETE /api/categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id: CategoryId = parse_id(&id, "Category")?;
    state.category_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Category deleted successfully")))
}
