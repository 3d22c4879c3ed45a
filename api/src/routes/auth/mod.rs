use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post, put},
};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;
pub mod put;

use crate::auth::guards::allow_authenticated;
use get::me;
use post::{logout, student_login, teacher_login};
use put::change_pin;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/student/login", post(student_login))
        .route("/teacher/login", post(teacher_login))
        .route("/logout", post(logout).route_layer(from_fn(allow_authenticated)))
        .route("/me", get(me).route_layer(from_fn(allow_authenticated)))
        .route(
            "/change-pin",
            put(change_pin).route_layer(from_fn(allow_authenticated)),
        )
}
