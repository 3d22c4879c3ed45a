use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::academy_class::Model as Class;
use util::state::AppState;

use super::common::ClassRequest;
use crate::response::ApiResponse;

/// POST /api/classes
pub async fn create_class(
    State(app_state): State<AppState>,
    Json(req): Json<ClassRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let Some(academy_id) = req.academy_id else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Class>::error("academy_id is required")),
        )
            .into_response();
    };

    match Class::create(db, academy_id, &req.name, req.clinic_weekday, req.clinic_time).await {
        Ok(class) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(class, "Class created successfully")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Class>::error(format!(
                "Failed to create class: {err}"
            ))),
        )
            .into_response(),
    }
}
