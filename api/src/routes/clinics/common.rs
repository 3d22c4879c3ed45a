use chrono::{NaiveDate, NaiveTime};
use db::models::clinic_registration::RegistrationStatus;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateClinicRequest {
    pub clinic_date: NaiveDate,
    pub clinic_time: NaiveTime,
}

/// `student_id` may be omitted when a student registers themselves.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub student_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct AttendanceRequest {
    pub status: RegistrationStatus,
}
