use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::test::Model as Test;
use sea_orm::DbErr;
use util::state::AppState;

use super::common::{EditTestRequest, TestAnswersRequest};
use crate::response::ApiResponse;
use crate::routes::common::{error_response, ok};

/// PUT /api/tests/{test_id}
pub async fn edit_test(
    State(app_state): State<AppState>,
    Path(test_id): Path<i64>,
    Json(req): Json<EditTestRequest>,
) -> Response {
    let db = app_state.db();

    match Test::rename(db, test_id, &req.title).await {
        Ok(test) => ok(test, "Test updated successfully"),
        Err(DbErr::RecordNotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Test>::error("Test not found")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Test>::error(format!(
                "Failed to update test: {err}"
            ))),
        )
            .into_response(),
    }
}

/// PUT /api/tests/{test_id}/answers
///
/// Replaces the question set with a new answer key (points assigned by
/// equal division of 100) and regrades every existing submission.
pub async fn save_answers(
    State(app_state): State<AppState>,
    Path(test_id): Path<i64>,
    Json(req): Json<TestAnswersRequest>,
) -> Response {
    match services::submission::save_test_answers(app_state.db(), test_id, &req.answers).await {
        Ok(questions) => ok(questions, "Answer key saved and submissions regraded"),
        Err(err) => error_response(err),
    }
}
