use axum::{Json, extract::State, response::Response};
use services::homework::CreateHomework;
use util::state::AppState;

use crate::routes::common::{created, error_response};

/// POST /api/homeworks
pub async fn create_homework(
    State(app_state): State<AppState>,
    Json(req): Json<CreateHomework>,
) -> Response {
    match services::homework::create_homework(app_state.db(), req).await {
        Ok(homework) => created(homework, "Homework created successfully"),
        Err(err) => error_response(err),
    }
}
