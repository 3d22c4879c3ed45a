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

use delete::delete_student;
use get::{get_student, get_students};
use post::create_student;
use put::edit_student;

pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_students))
        .route("/", post(create_student))
        .route("/{student_id}", get(get_student))
        .route("/{student_id}", put(edit_student))
        .route("/{student_id}", delete(delete_student))
}
