use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::academy::Model as Academy;
use util::state::AppState;

use super::common::AcademyRequest;
use crate::response::ApiResponse;

/// POST /api/academies
pub async fn create_academy(
    State(app_state): State<AppState>,
    Json(req): Json<AcademyRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    match Academy::create(db, &req.name).await {
        Ok(academy) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(academy, "Academy created successfully")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Academy>::error(format!(
                "Failed to create academy: {err}"
            ))),
        )
            .into_response(),
    }
}
