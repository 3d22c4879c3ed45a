use axum::{
    extract::{Path, State},
    response::Response,
};
use util::state::AppState;

use crate::routes::common::{error_response, ok};

/// DELETE /api/lessons/{lesson_id}
///
/// Refused while a test or homework is still attached.
pub async fn delete_lesson(
    State(app_state): State<AppState>,
    Path(lesson_id): Path<i64>,
) -> Response {
    match services::lesson::delete_lesson(app_state.db(), lesson_id).await {
        Ok(()) => ok((), "Lesson deleted successfully"),
        Err(err) => error_response(err),
    }
}

/// DELETE /api/lessons/{lesson_id}/test
pub async fn detach_test(
    State(app_state): State<AppState>,
    Path(lesson_id): Path<i64>,
) -> Response {
    match services::lesson::detach_test(app_state.db(), lesson_id).await {
        Ok(lesson) => ok(lesson, "Test detached from lesson"),
        Err(err) => error_response(err),
    }
}

/// DELETE /api/lessons/{lesson_id}/homework/{homework_id}
pub async fn remove_homework(
    State(app_state): State<AppState>,
    Path((lesson_id, homework_id)): Path<(i64, i64)>,
) -> Response {
    match services::lesson::remove_homework(app_state.db(), lesson_id, homework_id).await {
        Ok(lesson) => ok(lesson, "Homework removed from lesson"),
        Err(err) => error_response(err),
    }
}
