use axum::{
    extract::{Path, State},
    response::Response,
};
use util::state::AppState;

use crate::routes::common::{error_response, ok};

/// DELETE /api/homeworks/{homework_id}
pub async fn delete_homework(
    State(app_state): State<AppState>,
    Path(homework_id): Path<i64>,
) -> Response {
    match services::homework::delete_homework(app_state.db(), homework_id).await {
        Ok(()) => ok((), "Homework deleted successfully"),
        Err(err) => error_response(err),
    }
}
