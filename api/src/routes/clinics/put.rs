use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};
use util::state::AppState;

use super::common::AttendanceRequest;
use crate::routes::common::{error_response, ok};

/// PUT /api/clinics/{clinic_id}/close
///
/// One-way `open -> closed` transition.
pub async fn close_clinic(
    State(app_state): State<AppState>,
    Path(clinic_id): Path<i64>,
) -> Response {
    match services::clinic::close_clinic(app_state.db(), clinic_id).await {
        Ok(clinic) => ok(clinic, "Clinic closed"),
        Err(err) => error_response(err),
    }
}

/// PUT /api/clinics/registrations/{registration_id}/attendance
pub async fn update_attendance(
    State(app_state): State<AppState>,
    Path(registration_id): Path<i64>,
    Json(req): Json<AttendanceRequest>,
) -> Response {
    match services::clinic::update_attendance(app_state.db(), registration_id, req.status).await {
        Ok(registration) => ok(registration, "Attendance updated"),
        Err(err) => error_response(err),
    }
}
