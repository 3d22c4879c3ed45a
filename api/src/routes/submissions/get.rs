use axum::{
    extract::{Path, Query, State},
    response::Response,
};
use util::state::AppState;

use super::common::SubmissionLookupReq;
use crate::routes::common::{error_response, ok};

/// GET /api/submissions/{submission_id}
pub async fn get_submission(
    State(app_state): State<AppState>,
    Path(submission_id): Path<i64>,
) -> Response {
    match services::submission::submission_with_details(app_state.db(), submission_id).await {
        Ok(submission) => ok(submission, "Submission retrieved successfully"),
        Err(err) => error_response(err),
    }
}

/// GET /api/submissions?student_id=..&test_id=..
pub async fn lookup_submission(
    State(app_state): State<AppState>,
    Query(params): Query<SubmissionLookupReq>,
) -> Response {
    match services::submission::submission_by_student_and_test(
        app_state.db(),
        params.student_id,
        params.test_id,
    )
    .await
    {
        Ok(submission) => ok(submission, "Submission retrieved successfully"),
        Err(err) => error_response(err),
    }
}

/// GET /api/submissions/student/{student_id}
///
/// The student's submissions, each carrying the class average and
/// competition rank for its test.
pub async fn get_submissions_by_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
) -> Response {
    match services::submission::student_submissions(app_state.db(), student_id).await {
        Ok(submissions) => ok(submissions, "Submissions retrieved successfully"),
        Err(err) => error_response(err),
    }
}

/// GET /api/submissions/test/{test_id}
pub async fn get_submissions_by_test(
    State(app_state): State<AppState>,
    Path(test_id): Path<i64>,
) -> Response {
    match services::submission::test_submissions(app_state.db(), test_id).await {
        Ok(submissions) => ok(submissions, "Submissions retrieved successfully"),
        Err(err) => error_response(err),
    }
}

/// GET /api/submissions/{submission_id}/feedback
pub async fn get_submission_feedback(
    State(app_state): State<AppState>,
    Path(submission_id): Path<i64>,
) -> Response {
    match services::feedback::feedback_by_submission(app_state.db(), submission_id).await {
        Ok(feedback) => ok(feedback, "Feedback retrieved successfully"),
        Err(err) => error_response(err),
    }
}
