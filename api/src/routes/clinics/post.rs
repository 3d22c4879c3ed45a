use axum::{
    Extension, Json,
    extract::{Path, State},
    response::Response,
};
use chrono::Utc;
use util::state::AppState;

use super::common::{CreateClinicRequest, RegisterRequest};
use crate::auth::AuthUser;
use crate::routes::common::{created, error_response, ok};

/// POST /api/clinics/class/{class_id}/create-for-this-week
///
/// Resolves the next-or-same occurrence of the class's configured clinic
/// weekday and opens a clinic on that date.
pub async fn create_clinic_for_this_week(
    State(app_state): State<AppState>,
    Path(class_id): Path<i64>,
) -> Response {
    let today = Utc::now().date_naive();

    match services::clinic::create_clinic_for_this_week(app_state.db(), class_id, today).await {
        Ok(clinic) => created(clinic, "Clinic created for this week"),
        Err(err) => error_response(err),
    }
}

/// POST /api/clinics/class/{class_id}
pub async fn create_clinic(
    State(app_state): State<AppState>,
    Path(class_id): Path<i64>,
    Json(req): Json<CreateClinicRequest>,
) -> Response {
    match services::clinic::create_clinic(app_state.db(), class_id, req.clinic_date, req.clinic_time)
        .await
    {
        Ok(clinic) => created(clinic, "Clinic created successfully"),
        Err(err) => error_response(err),
    }
}

/// POST /api/clinics/{clinic_id}/register
///
/// Students register themselves; a teacher may register a student by
/// naming them in the body.
pub async fn register_for_clinic(
    State(app_state): State<AppState>,
    Path(clinic_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<RegisterRequest>,
) -> Response {
    let student_id = req.student_id.unwrap_or(claims.sub);
    let today = Utc::now().date_naive();

    match services::clinic::register(app_state.db(), clinic_id, student_id, today).await {
        Ok(registration) => ok(registration, "Registered for clinic"),
        Err(err) => error_response(err),
    }
}
