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
use delete::{cancel_registration, delete_clinic};
use get::{get_clinic_detail, get_clinics_by_class, get_student_clinic_info, get_upcoming_clinic};
use post::{create_clinic, create_clinic_for_this_week, register_for_clinic};
use put::{close_clinic, update_attendance};

pub fn clinic_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/class/{class_id}/create-for-this-week",
            post(create_clinic_for_this_week).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/class/{class_id}",
            post(create_clinic).route_layer(from_fn(allow_teacher)),
        )
        .route("/class/{class_id}", get(get_clinics_by_class))
        .route("/class/{class_id}/upcoming", get(get_upcoming_clinic))
        .route(
            "/registrations/{registration_id}/attendance",
            put(update_attendance).route_layer(from_fn(allow_teacher)),
        )
        .route("/student/{student_id}/info", get(get_student_clinic_info))
        .route(
            "/{clinic_id}/detail",
            get(get_clinic_detail).route_layer(from_fn(allow_teacher)),
        )
        .route("/{clinic_id}/register", post(register_for_clinic))
        .route("/{clinic_id}/register/{student_id}", delete(cancel_registration))
        .route(
            "/{clinic_id}/close",
            put(close_clinic).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/{clinic_id}",
            delete(delete_clinic).route_layer(from_fn(allow_teacher)),
        )
}
