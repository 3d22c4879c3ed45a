use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::student::Model as Student;
use util::state::AppState;

use crate::response::ApiResponse;

/// DELETE /api/students/{student_id}
pub async fn delete_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match Student::delete(db, student_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Student deleted successfully")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!(
                "Failed to delete student: {err}"
            ))),
        )
            .into_response(),
    }
}
