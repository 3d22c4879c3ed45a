use axum::{
    extract::{Path, State},
    response::Response,
};
use util::state::AppState;

use crate::routes::common::{error_response, ok};

/// DELETE /api/clinics/{clinic_id}/register/{student_id}
///
/// Cancels the registration; the row survives and can be reactivated.
pub async fn cancel_registration(
    State(app_state): State<AppState>,
    Path((clinic_id, student_id)): Path<(i64, i64)>,
) -> Response {
    match services::clinic::cancel_registration(app_state.db(), clinic_id, student_id).await {
        Ok(registration) => ok(registration, "Registration cancelled"),
        Err(err) => error_response(err),
    }
}

/// DELETE /api/clinics/{clinic_id}
///
/// Refused while any registration rows exist.
pub async fn delete_clinic(
    State(app_state): State<AppState>,
    Path(clinic_id): Path<i64>,
) -> Response {
    match services::clinic::delete_clinic(app_state.db(), clinic_id).await {
        Ok(()) => ok((), "Clinic deleted successfully"),
        Err(err) => error_response(err),
    }
}
