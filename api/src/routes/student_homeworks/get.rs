use axum::{
    extract::{Path, State},
    response::Response,
};
use util::state::AppState;

use crate::routes::common::{error_response, ok};

/// GET /api/student-homeworks/student/{student_id}
///
/// All homework rows of a student with derived completion.
pub async fn get_by_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
) -> Response {
    match services::homework::homeworks_by_student(app_state.db(), student_id).await {
        Ok(views) => ok(views, "Student homeworks retrieved successfully"),
        Err(err) => error_response(err),
    }
}

/// GET /api/student-homeworks/homework/{homework_id}
pub async fn get_by_homework(
    State(app_state): State<AppState>,
    Path(homework_id): Path<i64>,
) -> Response {
    match services::homework::students_of_homework(app_state.db(), homework_id).await {
        Ok(views) => ok(views, "Student homeworks retrieved successfully"),
        Err(err) => error_response(err),
    }
}
