use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use db::models::lesson::{Column, Entity, Model as Lesson};
use db::repository::Repository;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::common::{PaginationReq, error_response, ok};

type LessonRepo = Repository<Entity, Column>;

#[derive(Serialize, Default)]
pub struct FilterResponse {
    pub lessons: Vec<Lesson>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

/// GET /api/lessons
///
/// Paginated lesson listing, newest first unless a sort is given.
pub async fn get_lessons(
    State(app_state): State<AppState>,
    Query(params): Query<PaginationReq>,
) -> Response {
    let db = app_state.db();

    let sort = params.sort.clone().or_else(|| Some("-lesson_date".into()));

    match LessonRepo::filter(db, &[], &[], params.page(), params.per_page(), sort).await {
        Ok((lessons, total)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                FilterResponse {
                    lessons,
                    page: params.page(),
                    per_page: params.per_page(),
                    total,
                },
                "Lessons retrieved successfully",
            )),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to list lessons");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<FilterResponse>::error(
                    "Failed to retrieve lessons",
                )),
            )
                .into_response()
        }
    }
}

/// GET /api/lessons/{lesson_id}
pub async fn get_lesson(State(app_state): State<AppState>, Path(lesson_id): Path<i64>) -> Response {
    match services::lesson::get_lesson(app_state.db(), lesson_id).await {
        Ok(lesson) => ok(lesson, "Lesson retrieved successfully"),
        Err(err) => error_response(err),
    }
}

/// GET /api/lessons/class/{class_id}
pub async fn get_lessons_by_class(
    State(app_state): State<AppState>,
    Path(class_id): Path<i64>,
) -> Response {
    match services::lesson::lessons_by_class(app_state.db(), class_id).await {
        Ok(lessons) => ok(lessons, "Lessons retrieved successfully"),
        Err(err) => error_response(err),
    }
}

/// GET /api/lessons/student/{student_id}
pub async fn get_lessons_by_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
) -> Response {
    match services::lesson::lessons_by_student(app_state.db(), student_id).await {
        Ok(lessons) => ok(lessons, "Lessons retrieved successfully"),
        Err(err) => error_response(err),
    }
}

/// GET /api/lessons/{lesson_id}/homeworks
pub async fn get_lesson_homeworks(
    State(app_state): State<AppState>,
    Path(lesson_id): Path<i64>,
) -> Response {
    match services::lesson::lesson_homeworks(app_state.db(), lesson_id).await {
        Ok(homeworks) => ok(homeworks, "Lesson homeworks retrieved successfully"),
        Err(err) => error_response(err),
    }
}

/// GET /api/lessons/{lesson_id}/stats
///
/// Roster-wide test ranking (competition ranking, non-submitters last and
/// unranked) and homework completion view for the lesson.
pub async fn get_lesson_stats(
    State(app_state): State<AppState>,
    Path(lesson_id): Path<i64>,
) -> Response {
    match services::lesson::lesson_student_stats(app_state.db(), lesson_id).await {
        Ok(stats) => ok(stats, "Lesson statistics retrieved successfully"),
        Err(err) => error_response(err),
    }
}

/// GET /api/lessons/{lesson_id}/assignments
pub async fn get_assignments(
    State(app_state): State<AppState>,
    Path(lesson_id): Path<i64>,
) -> Response {
    match services::lesson::get_assignments(app_state.db(), lesson_id).await {
        Ok(assignments) => ok(assignments, "Assignments retrieved successfully"),
        Err(err) => error_response(err),
    }
}
