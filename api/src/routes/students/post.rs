use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::student::Model as Student;
use util::state::AppState;

use super::common::CreateStudentRequest;
use crate::response::ApiResponse;

/// POST /api/students
pub async fn create_student(
    State(app_state): State<AppState>,
    Json(req): Json<CreateStudentRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    match Student::create(db, req.class_id, &req.name, &req.grade, &req.school, &req.pin).await {
        Ok(student) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(student, "Student created successfully")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Student>::error(format!(
                "Failed to create student: {err}"
            ))),
        )
            .into_response(),
    }
}
