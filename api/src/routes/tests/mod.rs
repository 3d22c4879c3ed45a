use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use crate::auth::guards::allow_teacher;
use delete::{delete_question, delete_test};
use get::{get_test, get_test_questions, get_test_stats, get_test_submissions, get_tests};
use post::{add_question, create_test};
use put::{edit_test, save_answers};

pub fn test_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_tests))
        .route("/", post(create_test).route_layer(from_fn(allow_teacher)))
        .route("/questions/{question_id}", delete(delete_question).route_layer(from_fn(allow_teacher)))
        .route("/{test_id}", get(get_test))
        .route("/{test_id}", put(edit_test).route_layer(from_fn(allow_teacher)))
        .route("/{test_id}", delete(delete_test).route_layer(from_fn(allow_teacher)))
        .route("/{test_id}/stats", get(get_test_stats))
        .route("/{test_id}/questions", get(get_test_questions))
        .route(
            "/{test_id}/questions",
            post(add_question).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/{test_id}/answers",
            put(save_answers).route_layer(from_fn(allow_teacher)),
        )
        .route("/{test_id}/submissions", get(get_test_submissions))
}
