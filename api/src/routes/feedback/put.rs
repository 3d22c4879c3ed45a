use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};
use util::state::AppState;

use super::common::EditFeedbackRequest;
use crate::routes::common::{error_response, ok};

/// PUT /api/feedback/{feedback_id}
pub async fn edit_feedback(
    State(app_state): State<AppState>,
    Path(feedback_id): Path<i64>,
    Json(req): Json<EditFeedbackRequest>,
) -> Response {
    match services::feedback::update_feedback(app_state.db(), feedback_id, &req.content).await {
        Ok(feedback) => ok(feedback, "Feedback updated successfully"),
        Err(err) => error_response(err),
    }
}
