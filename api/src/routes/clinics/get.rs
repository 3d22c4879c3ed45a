use axum::{
    extract::{Path, State},
    response::Response,
};
use chrono::Utc;
use util::{config, state::AppState};

use crate::routes::common::{error_response, ok};

/// GET /api/clinics/class/{class_id}
pub async fn get_clinics_by_class(
    State(app_state): State<AppState>,
    Path(class_id): Path<i64>,
) -> Response {
    match services::clinic::clinics_by_class(app_state.db(), class_id).await {
        Ok(clinics) => ok(clinics, "Clinics retrieved successfully"),
        Err(err) => error_response(err),
    }
}

/// GET /api/clinics/class/{class_id}/upcoming
pub async fn get_upcoming_clinic(
    State(app_state): State<AppState>,
    Path(class_id): Path<i64>,
) -> Response {
    let today = Utc::now().date_naive();

    match services::clinic::upcoming_clinic(app_state.db(), class_id, today).await {
        Ok(clinic) => ok(clinic, "Upcoming clinic retrieved"),
        Err(err) => error_response(err),
    }
}

/// GET /api/clinics/{clinic_id}/detail
///
/// Roster-wide view of registrations and sub-threshold homework progress.
pub async fn get_clinic_detail(
    State(app_state): State<AppState>,
    Path(clinic_id): Path<i64>,
) -> Response {
    match services::clinic::clinic_detail(app_state.db(), clinic_id).await {
        Ok(detail) => ok(detail, "Clinic detail retrieved"),
        Err(err) => error_response(err),
    }
}

/// GET /api/clinics/student/{student_id}/info
///
/// The student's upcoming clinic, their registration, and whether their
/// homework completion record says they should attend.
pub async fn get_student_clinic_info(
    State(app_state): State<AppState>,
    Path(student_id): Path<i64>,
) -> Response {
    let today = Utc::now().date_naive();
    let threshold = config::clinic_completion_threshold();

    match services::clinic::student_clinic_info(app_state.db(), student_id, today, threshold).await
    {
        Ok(info) => ok(info, "Student clinic info retrieved"),
        Err(err) => error_response(err),
    }
}
