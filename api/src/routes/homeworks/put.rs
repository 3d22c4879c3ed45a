use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};
use services::homework::UpdateHomework;
use util::state::AppState;

use crate::routes::common::{error_response, ok};

/// PUT /api/homeworks/{homework_id}
pub async fn edit_homework(
    State(app_state): State<AppState>,
    Path(homework_id): Path<i64>,
    Json(req): Json<UpdateHomework>,
) -> Response {
    match services::homework::update_homework(app_state.db(), homework_id, req).await {
        Ok(homework) => ok(homework, "Homework updated successfully"),
        Err(err) => error_response(err),
    }
}
