//! Request/response DTOs for the auth route group.

use crate::auth::Role;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct StudentLoginRequest {
    pub student_id: i64,
    pub pin: String,
}

#[derive(Debug, Deserialize)]
pub struct TeacherLoginRequest {
    pub username: String,
    pub pin: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ChangePinRequest {
    pub current_pin: String,
    #[validate(length(min = 4, message = "PIN must be at least 4 characters"))]
    pub new_pin: String,
}

#[derive(Debug, Serialize, Default)]
pub struct AuthResponse {
    pub user_id: i64,
    pub name: String,
    pub role: Option<Role>,
    pub token: Option<String>,
    pub expires_at: Option<String>,
}
