use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::academy_class::Model as Class;
use sea_orm::DbErr;
use util::state::AppState;

use super::common::ClassRequest;
use crate::response::ApiResponse;

/// PUT /api/classes/{class_id}
///
/// Partial name update (empty string keeps the current name); the clinic
/// slot is always replaced with the provided values.
pub async fn edit_class(
    State(app_state): State<AppState>,
    Path(class_id): Path<i64>,
    Json(req): Json<ClassRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    match Class::update(db, class_id, &req.name, req.clinic_weekday, req.clinic_time).await {
        Ok(class) => (
            StatusCode::OK,
            Json(ApiResponse::success(class, "Class updated successfully")),
        )
            .into_response(),
        Err(DbErr::RecordNotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Class>::error("Class not found")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Class>::error(format!(
                "Failed to update class: {err}"
            ))),
        )
            .into_response(),
    }
}
