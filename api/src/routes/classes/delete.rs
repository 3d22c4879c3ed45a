use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::academy_class::Model as Class;
use util::state::AppState;

use crate::response::ApiResponse;

/// DELETE /api/classes/{class_id}
pub async fn delete_class(
    State(app_state): State<AppState>,
    Path(class_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match Class::delete(db, class_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Class deleted successfully")),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!(
                "Failed to delete class: {err}"
            ))),
        )
            .into_response(),
    }
}
