use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::student::Model as Student;
use sea_orm::DbErr;
use util::state::AppState;

use super::common::UpdateStudentRequest;
use crate::response::ApiResponse;

/// PUT /api/students/{student_id}
pub async fn edit_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
    Json(req): Json<UpdateStudentRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    match Student::update(db, student_id, req.class_id, &req.name, &req.grade, &req.school).await {
        Ok(student) => (
            StatusCode::OK,
            Json(ApiResponse::success(student, "Student updated successfully")),
        )
            .into_response(),
        Err(DbErr::RecordNotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Student>::error("Student not found")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Student>::error(format!(
                "Failed to update student: {err}"
            ))),
        )
            .into_response(),
    }
}
