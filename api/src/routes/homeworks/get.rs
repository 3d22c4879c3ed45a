use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

use db::models::homework::{Column, Entity, Model as Homework};
use db::repository::Repository;
use util::filters::FilterParam;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::common::{error_response, ok};

type HomeworkRepo = Repository<Entity, Column>;

#[derive(Debug, Deserialize)]
pub struct HomeworkFilterReq {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub class_id: Option<i64>,
    pub sort: Option<String>,
}

#[derive(Serialize, Default)]
pub struct FilterResponse {
    pub homeworks: Vec<Homework>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

/// GET /api/homeworks
///
/// Paginated homework listing; `class_id` narrows to one class.
pub async fn get_homeworks(
    State(app_state): State<AppState>,
    Query(params): Query<HomeworkFilterReq>,
) -> Response {
    let db = app_state.db();

    let page = params.page.unwrap_or(1).max(1);
    let per_page = params.per_page.unwrap_or(20).clamp(1, 100);

    let mut filters: Vec<FilterParam> = Vec::new();
    if let Some(class_id) = params.class_id {
        filters.push(FilterParam::eq("class_id", class_id));
    }

    match HomeworkRepo::filter(db, &filters, &[], page, per_page, params.sort).await {
        Ok((homeworks, total)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                FilterResponse {
                    homeworks,
                    page,
                    per_page,
                    total,
                },
                "Homeworks retrieved successfully",
            )),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to list homeworks");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<FilterResponse>::error(
                    "Failed to retrieve homeworks",
                )),
            )
                .into_response()
        }
    }
}

/// GET /api/homeworks/unattached?academy_id=..&class_id=..
///
/// The pool of homeworks not yet attached to any lesson.
pub async fn get_unattached_homeworks(
    State(app_state): State<AppState>,
    Query(params): Query<UnattachedReq>,
) -> Response {
    match services::homework::unattached_homeworks(
        app_state.db(),
        params.academy_id,
        params.class_id,
    )
    .await
    {
        Ok(homeworks) => ok(homeworks, "Homeworks retrieved successfully"),
        Err(err) => error_response(err),
    }
}

#[derive(Debug, Deserialize)]
pub struct UnattachedReq {
    pub academy_id: i64,
    pub class_id: i64,
}

/// GET /api/homeworks/{homework_id}
pub async fn get_homework(
    State(app_state): State<AppState>,
    Path(homework_id): Path<i64>,
) -> Response {
    match services::homework::get_homework(app_state.db(), homework_id).await {
        Ok(homework) => ok(homework, "Homework retrieved successfully"),
        Err(err) => error_response(err),
    }
}
