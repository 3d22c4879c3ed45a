use axum::{
    extract::{Path, State},
    response::Response,
};
use util::state::AppState;

use crate::routes::common::{error_response, ok};

/// DELETE /api/student-homeworks/student/{student_id}/homework/{homework_id}
pub async fn remove_assignment(
    State(app_state): State<AppState>,
    Path((student_id, homework_id)): Path<(i64, i64)>,
) -> Response {
    match services::homework::remove_assignment(app_state.db(), student_id, homework_id).await {
        Ok(()) => ok((), "Homework assignment removed"),
        Err(err) => error_response(err),
    }
}
