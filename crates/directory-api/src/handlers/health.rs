//! Health check handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /
pub async fn root() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message("User Management API is running"))
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let report = state.user_service.health().await;
    let status = if report.store_healthy && report.media_healthy {
        "ok"
    } else {
        "degraded"
    };

    Json(ApiResponse::ok(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: report.store,
        store_healthy: report.store_healthy,
        media: report.media,
        media_healthy: report.media_healthy,
    }))
}
