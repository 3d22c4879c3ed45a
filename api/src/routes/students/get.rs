use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};

use db::models::student::{Column, Entity, Model as Student};
use db::repository::Repository;
use sea_orm::EntityTrait;
use util::filters::{FilterParam, QueryParam};
use util::state::AppState;

use crate::response::ApiResponse;

type StudentRepo = Repository<Entity, Column>;

#[derive(Debug, Deserialize)]
pub struct StudentFilterReq {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub class_id: Option<i64>,
    pub query: Option<String>,
    pub sort: Option<String>,
}

#[derive(Serialize, Default)]
pub struct FilterResponse {
    pub students: Vec<Student>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

/// GET /api/students
///
/// Paginated student listing. `class_id` narrows to one roster; `query`
/// searches name and school.
pub async fn get_students(
    State(app_state): State<AppState>,
    Query(params): Query<StudentFilterReq>,
) -> impl IntoResponse {
    let db = app_state.db();

    let page = params.page.unwrap_or(1).max(1);
    let per_page = params.per_page.unwrap_or(20).clamp(1, 100);

    let mut filters: Vec<FilterParam> = Vec::new();
    if let Some(class_id) = params.class_id {
        filters.push(FilterParam::eq("class_id", class_id));
    }

    let query_params: Vec<QueryParam> = params
        .query
        .as_ref()
        .map(|q| vec![QueryParam::new(vec!["name".into(), "school".into()], q.clone())])
        .unwrap_or_default();

    match StudentRepo::filter(db, &filters, &query_params, page, per_page, params.sort).await {
        Ok((students, total)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                FilterResponse {
                    students,
                    page,
                    per_page,
                    total,
                },
                "Students retrieved successfully",
            )),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to list students");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<FilterResponse>::error(
                    "Failed to retrieve students",
                )),
            )
                .into_response()
        }
    }
}

/// GET /api/students/{student_id}
pub async fn get_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match Entity::find_by_id(student_id).one(db).await {
        Ok(Some(student)) => (
            StatusCode::OK,
            Json(ApiResponse::success(student, "Student retrieved successfully")),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Student>::error("Student not found")),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to fetch student");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Student>::error("Failed to retrieve student")),
            )
                .into_response()
        }
    }
}
