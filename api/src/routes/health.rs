use crate::response::ApiResponse;
use axum::{Json, Router, routing::get};
use util::state::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health))
}

/// GET /api/health
///
/// Liveness probe; returns the project name.
async fn health() -> Json<ApiResponse<String>> {
    Json(ApiResponse::success(
        util::config::project_name(),
        "Service is healthy",
    ))
}
