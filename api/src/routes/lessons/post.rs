use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};
use util::state::AppState;

use super::common::{AssignHomeworksRequest, CreateLessonRequest};
use crate::routes::common::{created, error_response, ok};

/// POST /api/lessons
pub async fn create_lesson(
    State(app_state): State<AppState>,
    Json(req): Json<CreateLessonRequest>,
) -> Response {
    match services::lesson::create_lesson(
        app_state.db(),
        req.academy_id,
        req.class_id,
        req.lesson_date,
    )
    .await
    {
        Ok(lesson) => created(lesson, "Lesson created successfully"),
        Err(err) => error_response(err),
    }
}

/// POST /api/lessons/{lesson_id}/assignments
///
/// Assigns lesson homeworks to students. Re-assignment is allowed while a
/// hand-in is ungraded; graded assignments are locked.
pub async fn assign_homeworks(
    State(app_state): State<AppState>,
    Path(lesson_id): Path<i64>,
    Json(req): Json<AssignHomeworksRequest>,
) -> Response {
    match services::lesson::assign_homeworks(app_state.db(), lesson_id, &req.assignments).await {
        Ok(()) => ok((), "Homework assignments saved"),
        Err(err) => error_response(err),
    }
}
