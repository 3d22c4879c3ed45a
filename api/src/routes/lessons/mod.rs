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
use delete::{delete_lesson, detach_test, remove_homework};
use get::{
    get_assignments, get_lesson, get_lesson_homeworks, get_lesson_stats, get_lessons,
    get_lessons_by_class, get_lessons_by_student,
};
use post::{assign_homeworks, create_lesson};
use put::{attach_homework, attach_test, update_content};

pub fn lesson_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_lessons))
        .route("/", post(create_lesson).route_layer(from_fn(allow_teacher)))
        .route("/class/{class_id}", get(get_lessons_by_class))
        .route("/student/{student_id}", get(get_lessons_by_student))
        .route("/{lesson_id}", get(get_lesson))
        .route(
            "/{lesson_id}",
            delete(delete_lesson).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/{lesson_id}/test/{test_id}",
            put(attach_test).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/{lesson_id}/test",
            delete(detach_test).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/{lesson_id}/homework/{homework_id}",
            put(attach_homework).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/{lesson_id}/homework/{homework_id}",
            delete(remove_homework).route_layer(from_fn(allow_teacher)),
        )
        .route("/{lesson_id}/homeworks", get(get_lesson_homeworks))
        .route("/{lesson_id}/stats", get(get_lesson_stats))
        .route(
            "/{lesson_id}/content",
            put(update_content).route_layer(from_fn(allow_teacher)),
        )
        .route(
            "/{lesson_id}/assignments",
            post(assign_homeworks).route_layer(from_fn(allow_teacher)),
        )
        .route("/{lesson_id}/assignments", get(get_assignments))
}
