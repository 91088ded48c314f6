//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_ok = state.store.health_check().await.unwrap_or(false);
    let storage_ok = state.files.provider().health_check().await.unwrap_or(false);

    let status = if store_ok && storage_ok { "ok" } else { "degraded" };
    let describe = |ok: bool, up: &str| if ok { up.to_string() } else { "unavailable".to_string() };

    Json(HealthResponse {
        status: status.to_string(),
        database: describe(store_ok, state.store.backend()),
        storage: describe(storage_ok, state.files.provider().provider_type()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
