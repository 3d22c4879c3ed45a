use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};
use serde::Deserialize;
use util::state::AppState;

use crate::routes::common::{error_response, ok};

#[derive(Debug, Deserialize)]
pub struct ProgressRequest {
    pub incorrect_count: Option<i32>,
    pub unsolved_count: Option<i32>,
}

/// PUT /api/student-homeworks/student/{student_id}/homework/{homework_id}
///
/// Records the grading counts for a hand-in; completion stays derived.
pub async fn update_progress(
    State(app_state): State<AppState>,
    Path((student_id, homework_id)): Path<(i64, i64)>,
    Json(req): Json<ProgressRequest>,
) -> Response {
    match services::homework::update_progress(
        app_state.db(),
        student_id,
        homework_id,
        req.incorrect_count,
        req.unsolved_count,
    )
    .await
    {
        Ok(view) => ok(view, "Homework progress updated"),
        Err(err) => error_response(err),
    }
}
