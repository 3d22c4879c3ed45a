use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::academy::Model as Academy;
use util::state::AppState;

use crate::response::ApiResponse;

/// DELETE /api/academies/{academy_id}
///
/// Hard delete; classes, students and their records cascade.
pub async fn delete_academy(
    State(app_state): State<AppState>,
    Path(academy_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match Academy::delete(db, academy_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Academy deleted successfully")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!(
                "Failed to delete academy: {err}"
            ))),
        )
            .into_response(),
    }
}
