use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

use crate::auth::guards::allow_teacher;
use get::{
    get_submission, get_submission_feedback, get_submissions_by_student,
    get_submissions_by_test, lookup_submission,
};
use post::{create_submission_feedback, submit_answers};

pub fn submission_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_answers))
        .route("/", get(lookup_submission))
        .route("/student/{student_id}", get(get_submissions_by_student))
        .route("/test/{test_id}", get(get_submissions_by_test))
        .route("/{submission_id}", get(get_submission))
        .route("/{submission_id}/feedback", get(get_submission_feedback))
        .route(
            "/{submission_id}/feedback",
            post(create_submission_feedback).route_layer(from_fn(allow_teacher)),
        )
}
