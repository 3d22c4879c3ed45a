use axum::{
    Extension, Json,
    extract::{Path, State},
    response::Response,
};
use chrono::Utc;
use util::state::AppState;

use super::common::{FeedbackRequest, SubmitAnswersRequest};
use crate::auth::AuthUser;
use crate::routes::common::{created, error_response, ok};

/// POST /api/submissions
///
/// Grades the submitted answers against the test's answer key. A repeat
/// submission for the same (student, test) pair replaces the previous one.
pub async fn submit_answers(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<SubmitAnswersRequest>,
) -> Response {
    let student_id = req.student_id.unwrap_or(claims.sub);

    match services::submission::grade_submission(
        app_state.db(),
        student_id,
        req.test_id,
        &req.answers,
        Utc::now(),
    )
    .await
    {
        Ok(graded) => ok(graded, "Submission graded"),
        Err(err) => error_response(err),
    }
}

/// POST /api/submissions/{submission_id}/feedback
pub async fn create_submission_feedback(
    State(app_state): State<AppState>,
    Path(submission_id): Path<i64>,
    Json(req): Json<FeedbackRequest>,
) -> Response {
    match services::feedback::create_feedback(
        app_state.db(),
        submission_id,
        &req.teacher_name,
        &req.content,
    )
    .await
    {
        Ok(feedback) => created(feedback, "Feedback created successfully"),
        Err(err) => error_response(err),
    }
}
