use axum::{
    extract::{Path, State},
    response::Response,
};
use chrono::Utc;
use util::state::AppState;

use crate::routes::common::{error_response, ok};

/// GET /api/daily-feedback/student/{student_id}/today
///
/// Resolves today's lesson for the student's class first.
pub async fn get_today_feedback(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
) -> Response {
    let today = Utc::now().date_naive();

    match services::daily_feedback::today_feedback(app_state.db(), student_id, today).await {
        Ok(feedback) => ok(feedback, "Daily feedback retrieved"),
        Err(err) => error_response(err),
    }
}

/// GET /api/daily-feedback/student/{student_id}/lesson/{lesson_id}
///
/// Homework summaries (today's and the next lesson's), the student's test
/// result with cohort accuracy, and the instructor note. Missing pieces
/// come back as null rather than erroring.
pub async fn get_daily_feedback(
    State(app_state): State<AppState>,
    Path((student_id, lesson_id)): Path<(i64, i64)>,
) -> Response {
    match services::daily_feedback::daily_feedback(app_state.db(), student_id, lesson_id).await {
        Ok(feedback) => ok(feedback, "Daily feedback retrieved"),
        Err(err) => error_response(err),
    }
}
