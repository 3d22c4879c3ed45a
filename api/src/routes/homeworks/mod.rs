use axum::{
    Router,
    routing::{delete, get, post, put},
};
use util::state::AppState;

pub mod delete;
pub mod get;
pub mod post;
pub mod put;

use delete::delete_homework;
use get::{get_homework, get_homeworks, get_unattached_homeworks};
use post::create_homework;
use put::edit_homework;

pub fn homework_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_homeworks))
        .route("/", post(create_homework))
        .route("/unattached", get(get_unattached_homeworks))
        .route("/{homework_id}", get(get_homework))
        .route("/{homework_id}", put(edit_homework))
        .route("/{homework_id}", delete(delete_homework))
}
