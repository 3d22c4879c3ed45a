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

use delete::delete_academy;
use get::{get_academies, get_academy};
use post::create_academy;
use put::edit_academy;

pub fn academy_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_academies))
        .route("/", post(create_academy))
        .route("/{academy_id}", get(get_academy))
        .route("/{academy_id}", put(edit_academy))
        .route("/{academy_id}", delete(delete_academy))
}
