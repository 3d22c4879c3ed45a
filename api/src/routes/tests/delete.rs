use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::test::Model as Test;
use db::models::test_question::Model as Question;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::common::ok;

/// DELETE /api/tests/{test_id}
pub async fn delete_test(
    State(app_state): State<AppState>,
    Path(test_id): Path<i64>,
) -> Response {
    match Test::delete(app_state.db(), test_id).await {
        Ok(()) => ok((), "Test deleted successfully"),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!(
                "Failed to delete test: {err}"
            ))),
        )
            .into_response(),
    }
}

/// DELETE /api/tests/questions/{question_id}
pub async fn delete_question(
    State(app_state): State<AppState>,
    Path(question_id): Path<i64>,
) -> Response {
    match Question::delete(app_state.db(), question_id).await {
        Ok(()) => ok((), "Question deleted successfully"),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!(
                "Failed to delete question: {err}"
            ))),
        )
            .into_response(),
    }
}
