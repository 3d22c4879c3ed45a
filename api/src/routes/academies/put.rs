use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::academy::Model as Academy;
use sea_orm::DbErr;
use util::state::AppState;

use super::common::AcademyRequest;
use crate::response::ApiResponse;

/// PUT /api/academies/{academy_id}
pub async fn edit_academy(
    State(app_state): State<AppState>,
    Path(academy_id): Path<i64>,
    Json(req): Json<AcademyRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    match Academy::rename(db, academy_id, &req.name).await {
        Ok(academy) => (
            StatusCode::OK,
            Json(ApiResponse::success(academy, "Academy updated successfully")),
        )
            .into_response(),
        Err(DbErr::RecordNotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Academy>::error("Academy not found")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Academy>::error(format!(
                "Failed to update academy: {err}"
            ))),
        )
            .into_response(),
    }
}
