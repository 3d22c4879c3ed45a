use axum::{
    Router,
    routing::{delete, get, post, put},
};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::delete_feedback;
use get::{get_feedback_by_student, get_feedback_by_test};
use post::create_feedback;
use put::edit_feedback;

pub fn feedback_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_feedback))
        .route("/test/{test_id}", get(get_feedback_by_test))
        .route("/student/{student_id}", get(get_feedback_by_student))
        .route("/{feedback_id}", put(edit_feedback))
        .route("/{feedback_id}", delete(delete_feedback))
}
