use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use db::models::academy_class::{Entity, Model as Class};
use db::models::student::Model as Student;
use sea_orm::EntityTrait;
use util::state::AppState;

use crate::response::ApiResponse;

/// GET /api/classes
pub async fn get_classes(State(app_state): State<AppState>) -> impl IntoResponse {
    let db = app_state.db();

    match Entity::find().all(db).await {
        Ok(classes) => (
            StatusCode::OK,
            Json(ApiResponse::success(classes, "Classes retrieved successfully")),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to list classes");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Vec<Class>>::error("Failed to retrieve classes")),
            )
                .into_response()
        }
    }
}

/// GET /api/classes/academy/{academy_id}
pub async fn get_classes_by_academy(
    State(app_state): State<AppState>,
    Path(academy_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match Class::find_by_academy(db, academy_id).await {
        Ok(classes) => (
            StatusCode::OK,
            Json(ApiResponse::success(classes, "Classes retrieved successfully")),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to list classes by academy");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Vec<Class>>::error("Failed to retrieve classes")),
            )
                .into_response()
        }
    }
}

/// GET /api/classes/{class_id}
pub async fn get_class(
    State(app_state): State<AppState>,
    Path(class_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match Entity::find_by_id(class_id).one(db).await {
        Ok(Some(class)) => (
            StatusCode::OK,
            Json(ApiResponse::success(class, "Class retrieved successfully")),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Class>::error("Class not found")),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to fetch class");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Class>::error("Failed to retrieve class")),
            )
                .into_response()
        }
    }
}

/// GET /api/classes/{class_id}/students
///
/// Roster of the class.
pub async fn get_class_students(
    State(app_state): State<AppState>,
    Path(class_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match Student::find_by_class(db, class_id).await {
        Ok(students) => (
            StatusCode::OK,
            Json(ApiResponse::success(students, "Students retrieved successfully")),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to list class roster");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Vec<Student>>::error(
                    "Failed to retrieve students",
                )),
            )
                .into_response()
        }
    }
}
