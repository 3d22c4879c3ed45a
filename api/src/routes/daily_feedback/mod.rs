use axum::{
    Router,
    middleware::from_fn,
    routing::{get, put},
};
use util::state::AppState;

pub mod get;
pub mod put;

use crate::auth::guards::allow_teacher;
use get::{get_daily_feedback, get_today_feedback};
use put::update_instructor_feedback;

pub fn daily_feedback_routes() -> Router<AppState> {
    Router::new()
        .route("/student/{student_id}/today", get(get_today_feedback))
        .route(
            "/student/{student_id}/lesson/{lesson_id}",
            get(get_daily_feedback),
        )
        .route(
            "/student/{student_id}/lesson/{lesson_id}",
            put(update_instructor_feedback).route_layer(from_fn(allow_teacher)),
        )
}
