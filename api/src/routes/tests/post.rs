use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::test::Model as Test;
use db::models::test_question::Model as Question;
use util::state::AppState;

use super::common::{AddQuestionRequest, CreateTestRequest};
use crate::response::ApiResponse;
use crate::routes::common::created;

/// POST /api/tests
pub async fn create_test(
    State(app_state): State<AppState>,
    Json(req): Json<CreateTestRequest>,
) -> Response {
    let db = app_state.db();

    match Test::create(db, req.academy_id, req.class_id, &req.title).await {
        Ok(test) => created(test, "Test created successfully"),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Test>::error(format!(
                "Failed to create test: {err}"
            ))),
        )
            .into_response(),
    }
}

/// POST /api/tests/{test_id}/questions
pub async fn add_question(
    State(app_state): State<AppState>,
    Path(test_id): Path<i64>,
    Json(req): Json<AddQuestionRequest>,
) -> Response {
    let db = app_state.db();

    match Question::create(
        db,
        test_id,
        req.number,
        req.answer.as_deref(),
        req.points.unwrap_or(0.0),
    )
    .await
    {
        Ok(question) => created(question, "Question added successfully"),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Question>::error(format!(
                "Failed to add question: {err}"
            ))),
        )
            .into_response(),
    }
}
