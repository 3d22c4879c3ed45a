use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::{student::Model as Student, teacher::Model as Teacher};
use sea_orm::EntityTrait;
use util::state::AppState;
use validator::Validate;

use super::common::ChangePinRequest;
use crate::auth::{AuthUser, Role};
use crate::auth::guards::Empty;
use crate::response::ApiResponse;

/// PUT /api/auth/change-pin
///
/// Verifies the caller's current PIN before storing the new one.
pub async fn change_pin(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<ChangePinRequest>,
) -> impl IntoResponse {
    if let Err(errors) = req.validate() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiResponse::<Empty>::error(errors.to_string())),
        )
            .into_response();
    }

    let db = app_state.db();

    let current_matches = match claims.role {
        Role::Student => Student::find_by_id_and_pin(db, claims.sub, &req.current_pin)
            .await
            .map(|found| found.is_some()),
        Role::Teacher => {
            match db::models::teacher::Entity::find_by_id(claims.sub).one(db).await {
                Ok(Some(teacher)) => Ok(teacher.pin == req.current_pin),
                Ok(None) => Ok(false),
                Err(err) => Err(err),
            }
        }
    };

    match current_matches {
        Ok(false) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<Empty>::error("Current PIN is incorrect")),
            )
                .into_response();
        }
        Err(err) => {
            tracing::error!(error = %err, "pin verification failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to change PIN")),
            )
                .into_response();
        }
        Ok(true) => {}
    }

    let updated = match claims.role {
        Role::Student => Student::change_pin(db, claims.sub, &req.new_pin)
            .await
            .map(|_| ()),
        Role::Teacher => Teacher::change_pin(db, claims.sub, &req.new_pin)
            .await
            .map(|_| ()),
    };

    match updated {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "PIN changed")),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "pin change failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Failed to change PIN")),
            )
                .into_response()
        }
    }
}
