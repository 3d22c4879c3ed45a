use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use db::models::test::{Column, Entity, Model as Test};
use db::models::test_question::Model as Question;
use db::repository::Repository;
use sea_orm::EntityTrait;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::common::{PaginationReq, error_response, ok};

type TestRepo = Repository<Entity, Column>;

#[derive(Serialize, Default)]
pub struct FilterResponse {
    pub tests: Vec<Test>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

/// GET /api/tests
pub async fn get_tests(
    State(app_state): State<AppState>,
    Query(params): Query<PaginationReq>,
) -> Response {
    let db = app_state.db();

    match TestRepo::filter(db, &[], &[], params.page(), params.per_page(), params.sort.clone())
        .await
    {
        Ok((tests, total)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                FilterResponse {
                    tests,
                    page: params.page(),
                    per_page: params.per_page(),
                    total,
                },
                "Tests retrieved successfully",
            )),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to list tests");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<FilterResponse>::error("Failed to retrieve tests")),
            )
                .into_response()
        }
    }
}

/// GET /api/tests/{test_id}
pub async fn get_test(State(app_state): State<AppState>, Path(test_id): Path<i64>) -> Response {
    let db = app_state.db();

    match Entity::find_by_id(test_id).one(db).await {
        Ok(Some(test)) => ok(test, "Test retrieved successfully"),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Test>::error("Test not found")),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to fetch test");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Test>::error("Failed to retrieve test")),
            )
                .into_response()
        }
    }
}

/// GET /api/tests/{test_id}/stats
///
/// Average and maximum scores, per-student scores, and per-question
/// correct rates across the cohort.
pub async fn get_test_stats(
    State(app_state): State<AppState>,
    Path(test_id): Path<i64>,
) -> Response {
    match services::submission::test_stats(app_state.db(), test_id).await {
        Ok(stats) => ok(stats, "Test statistics retrieved successfully"),
        Err(err) => error_response(err),
    }
}

/// GET /api/tests/{test_id}/questions
pub async fn get_test_questions(
    State(app_state): State<AppState>,
    Path(test_id): Path<i64>,
) -> Response {
    match Question::find_by_test(app_state.db(), test_id).await {
        Ok(questions) => ok(questions, "Questions retrieved successfully"),
        Err(err) => {
            tracing::error!(error = %err, "failed to list questions");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Vec<Question>>::error(
                    "Failed to retrieve questions",
                )),
            )
                .into_response()
        }
    }
}

/// GET /api/tests/{test_id}/submissions
pub async fn get_test_submissions(
    State(app_state): State<AppState>,
    Path(test_id): Path<i64>,
) -> Response {
    match services::submission::test_submissions(app_state.db(), test_id).await {
        Ok(submissions) => ok(submissions, "Submissions retrieved successfully"),
        Err(err) => error_response(err),
    }
}
