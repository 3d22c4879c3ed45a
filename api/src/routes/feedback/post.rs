use axum::{Json, extract::State, response::Response};
use util::state::AppState;

use super::common::CreateFeedbackRequest;
use crate::routes::common::{created, error_response};

/// POST /api/feedback
pub async fn create_feedback(
    State(app_state): State<AppState>,
    Json(req): Json<CreateFeedbackRequest>,
) -> Response {
    match services::feedback::create_feedback(
        app_state.db(),
        req.submission_id,
        &req.teacher_name,
        &req.content,
    )
    .await
    {
        Ok(feedback) => created(feedback, "Feedback created successfully"),
        Err(err) => error_response(err),
    }
}
