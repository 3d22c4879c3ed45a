use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Serialize;

use db::models::academy::{Column, Entity, Model as Academy};
use db::repository::Repository;
use sea_orm::EntityTrait;
use util::filters::QueryParam;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::common::PaginationReq;

type AcademyRepo = Repository<Entity, Column>;

#[derive(Serialize, Default)]
pub struct FilterResponse {
    pub academies: Vec<Academy>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

/// GET /api/academies
///
/// Paginated academy listing; `query` searches by name.
pub async fn get_academies(
    State(app_state): State<AppState>,
    Query(params): Query<PaginationReq>,
) -> impl IntoResponse {
    let db = app_state.db();

    let query_params: Vec<QueryParam> = params
        .query
        .as_ref()
        .map(|q| vec![QueryParam::new(vec!["name".into()], q.clone())])
        .unwrap_or_default();

    match AcademyRepo::filter(
        db,
        &[],
        &query_params,
        params.page(),
        params.per_page(),
        params.sort.clone(),
    )
    .await
    {
        Ok((academies, total)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                FilterResponse {
                    academies,
                    page: params.page(),
                    per_page: params.per_page(),
                    total,
                },
                "Academies retrieved successfully",
            )),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to list academies");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<FilterResponse>::error(
                    "Failed to retrieve academies",
                )),
            )
                .into_response()
        }
    }
}

/// GET /api/academies/{academy_id}
pub async fn get_academy(
    State(app_state): State<AppState>,
    Path(academy_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match Entity::find_by_id(academy_id).one(db).await {
        Ok(Some(academy)) => (
            StatusCode::OK,
            Json(ApiResponse::success(academy, "Academy retrieved successfully")),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Academy>::error("Academy not found")),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to fetch academy");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Academy>::error("Failed to retrieve academy")),
            )
                .into_response()
        }
    }
}
