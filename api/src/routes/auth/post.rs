use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::{student::Model as Student, teacher::Model as Teacher};
use util::state::AppState;

use super::common::{AuthResponse, StudentLoginRequest, TeacherLoginRequest};
use crate::auth::{Role, generate_jwt};
use crate::response::ApiResponse;

/// POST /api/auth/student/login
///
/// Students authenticate with their numeric id plus PIN.
pub async fn student_login(
    State(app_state): State<AppState>,
    Json(req): Json<StudentLoginRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    match Student::find_by_id_and_pin(db, req.student_id, &req.pin).await {
        Ok(Some(student)) => {
            let (token, expires_at) = generate_jwt(student.id, Role::Student);
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    AuthResponse {
                        user_id: student.id,
                        name: student.name,
                        role: Some(Role::Student),
                        token: Some(token),
                        expires_at: Some(expires_at),
                    },
                    "Login successful",
                )),
            )
                .into_response()
        }
        Ok(None) => (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<AuthResponse>::error(
                "Invalid student ID or PIN",
            )),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "student login failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<AuthResponse>::error("Login failed")),
            )
                .into_response()
        }
    }
}

/// POST /api/auth/teacher/login
pub async fn teacher_login(
    State(app_state): State<AppState>,
    Json(req): Json<TeacherLoginRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    match Teacher::find_by_username_and_pin(db, &req.username, &req.pin).await {
        Ok(Some(teacher)) => {
            let (token, expires_at) = generate_jwt(teacher.id, Role::Teacher);
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    AuthResponse {
                        user_id: teacher.id,
                        name: teacher.name,
                        role: Some(Role::Teacher),
                        token: Some(token),
                        expires_at: Some(expires_at),
                    },
                    "Login successful",
                )),
            )
                .into_response()
        }
        Ok(None) => (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<AuthResponse>::error("Invalid username or PIN")),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "teacher login failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<AuthResponse>::error("Login failed")),
            )
                .into_response()
        }
    }
}

/// POST /api/auth/logout
///
/// Tokens are stateless; the endpoint exists for API parity and the
/// client simply drops its token.
pub async fn logout() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse::success((), "Logged out")),
    )
}
