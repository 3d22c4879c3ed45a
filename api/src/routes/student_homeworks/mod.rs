use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, put},
};
use util::state::AppState;

pub mod delete;
pub mod get;
pub mod put;

use crate::auth::guards::allow_teacher;
use delete::remove_assignment;
use get::{get_by_homework, get_by_student};
use put::update_progress;

pub fn student_homework_routes() -> Router<AppState> {
    Router::new()
        .route("/student/{student_id}", get(get_by_student))
        .route("/homework/{homework_id}", get(get_by_homework))
        .route(
            "/student/{student_id}/homework/{homework_id}",
            put(update_progress).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/student/{student_id}/homework/{homework_id}",
            delete(remove_assignment).route_layer(from_fn(allow_teacher)),
        )
}
