use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};
use util::state::AppState;

use super::common::LessonContentRequest;
use crate::routes::common::{error_response, ok};

/// PUT /api/lessons/{lesson_id}/test/{test_id}
pub async fn attach_test(
    State(app_state): State<AppState>,
    Path((lesson_id, test_id)): Path<(i64, i64)>,
) -> Response {
    match services::lesson::attach_test(app_state.db(), lesson_id, test_id).await {
        Ok(lesson) => ok(lesson, "Test attached to lesson"),
        Err(err) => error_response(err),
    }
}

/// PUT /api/lessons/{lesson_id}/homework/{homework_id}
pub async fn attach_homework(
    State(app_state): State<AppState>,
    Path((lesson_id, homework_id)): Path<(i64, i64)>,
) -> Response {
    match services::lesson::attach_homework(app_state.db(), lesson_id, homework_id).await {
        Ok(lesson) => ok(lesson, "Homework attached to lesson"),
        Err(err) => error_response(err),
    }
}

/// PUT /api/lessons/{lesson_id}/content
///
/// Updates the lesson's shared feedback and announcement.
pub async fn update_content(
    State(app_state): State<AppState>,
    Path(lesson_id): Path<i64>,
    Json(req): Json<LessonContentRequest>,
) -> Response {
    match services::lesson::update_lesson_content(
        app_state.db(),
        lesson_id,
        req.common_feedback,
        req.announcement,
    )
    .await
    {
        Ok(lesson) => ok(lesson, "Lesson content updated"),
        Err(err) => error_response(err),
    }
}
