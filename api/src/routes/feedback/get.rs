use axum::{
    extract::{Path, State},
    response::Response,
};
use util::state::AppState;

use crate::routes::common::{error_response, ok};

/// GET /api/feedback/test/{test_id}
pub async fn get_feedback_by_test(
    State(app_state): State<AppState>,
    Path(test_id): Path<i64>,
) -> Response {
    match services::feedback::feedback_by_test(app_state.db(), test_id).await {
        Ok(feedback) => ok(feedback, "Feedback retrieved successfully"),
        Err(err) => error_response(err),
    }
}

/// GET /api/feedback/student/{student_id}
pub async fn get_feedback_by_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
) -> Response {
    match services::feedback::feedback_by_student(app_state.db(), student_id).await {
        Ok(feedback) => ok(feedback, "Feedback retrieved successfully"),
        Err(err) => error_response(err),
    }
}
