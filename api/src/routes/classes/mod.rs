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
use delete::delete_class;
use get::{get_class, get_class_students, get_classes, get_classes_by_academy};
use post::create_class;
use put::edit_class;

pub fn class_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_classes))
        .route("/", post(create_class).route_layer(from_fn(allow_teacher)))
        .route("/academy/{academy_id}", get(get_classes_by_academy))
        .route("/{class_id}", get(get_class))
        .route("/{class_id}", put(edit_class).route_layer(from_fn(allow_teacher)))
        .route(
            "/{class_id}",
            delete(delete_class).route_layer(from_fn(allow_teacher)),
        )
        .route("/{class_id}/students", get(get_class_students))
}
