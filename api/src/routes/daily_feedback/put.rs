use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};
use serde::Deserialize;
use util::state::AppState;

use crate::routes::common::{error_response, ok};

#[derive(Debug, Deserialize)]
pub struct InstructorFeedbackRequest {
    pub feedback: String,
    pub author: String,
}

/// PUT /api/daily-feedback/student/{student_id}/lesson/{lesson_id}
///
/// Upserts the instructor's note for the (student, lesson) pair.
pub async fn update_instructor_feedback(
    State(app_state): State<AppState>,
    Path((student_id, lesson_id)): Path<(i64, i64)>,
    Json(req): Json<InstructorFeedbackRequest>,
) -> Response {
    match services::daily_feedback::update_instructor_feedback(
        app_state.db(),
        student_id,
        lesson_id,
        &req.feedback,
        &req.author,
    )
    .await
    {
        Ok(note) => ok(note, "Instructor feedback saved"),
        Err(err) => error_response(err),
    }
}
