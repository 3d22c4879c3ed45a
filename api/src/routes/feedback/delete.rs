use axum::{
    extract::{Path, State},
    response::Response,
};
use util::state::AppState;

use crate::routes::common::{error_response, ok};

/// DELETE /api/feedback/{feedback_id}
pub async fn delete_feedback(
    State(app_state): State<AppState>,
    Path(feedback_id): Path<i64>,
) -> Response {
    match services::feedback::delete_feedback(app_state.db(), feedback_id).await {
        Ok(()) => ok((), "Feedback deleted successfully"),
        Err(err) => error_response(err),
    }
}
