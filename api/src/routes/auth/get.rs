use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::{student, teacher};
use sea_orm::EntityTrait;
use util::state::AppState;

use super::common::AuthResponse;
use crate::auth::{AuthUser, Role};
use crate::response::ApiResponse;

/// GET /api/auth/me
///
/// Resolves the authenticated caller's display name from their claims.
pub async fn me(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> impl IntoResponse {
    let db = app_state.db();

    let name = match claims.role {
        Role::Student => student::Entity::find_by_id(claims.sub)
            .one(db)
            .await
            .ok()
            .flatten()
            .map(|s| s.name),
        Role::Teacher => teacher::Entity::find_by_id(claims.sub)
            .one(db)
            .await
            .ok()
            .flatten()
            .map(|t| t.name),
    };

    let Some(name) = name else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<AuthResponse>::error("Account no longer exists")),
        )
            .into_response();
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            AuthResponse {
                user_id: claims.sub,
                name,
                role: Some(claims.role),
                token: None,
                expires_at: None,
            },
            "Authenticated",
        )),
    )
        .into_response()
}
