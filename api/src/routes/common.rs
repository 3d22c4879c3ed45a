//! Shared helpers for route handlers.

use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use services::ServiceError;

/// Standard pagination query parameters for list endpoints.
#[derive(Debug, Deserialize)]
pub struct PaginationReq {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub sort: Option<String>,
    pub query: Option<String>,
}

impl PaginationReq {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn per_page(&self) -> u64 {
        self.per_page.unwrap_or(20).clamp(1, 100)
    }
}

/// Maps a `ServiceError` onto the HTTP taxonomy: missing ids are 404,
/// failed preconditions 400, anything database-shaped 500.
pub fn error_response(err: ServiceError) -> Response {
    let status = match &err {
        ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
        ServiceError::InvalidState(_) => StatusCode::BAD_REQUEST,
        ServiceError::Db(db_err) => {
            tracing::error!(error = %db_err, "service call failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, Json(ApiResponse::<Empty>::error(err.to_string()))).into_response()
}

pub fn ok<T: serde::Serialize>(data: T, message: impl Into<String>) -> Response {
    (StatusCode::OK, Json(ApiResponse::success(data, message))).into_response()
}

pub fn created<T: serde::Serialize>(data: T, message: impl Into<String>) -> Response {
    (
        StatusCode::CREATED,
        Json(ApiResponse::success(data, message)),
    )
        .into_response()
}
