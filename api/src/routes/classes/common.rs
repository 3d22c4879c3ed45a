use chrono::NaiveTime;
use db::models::academy_class::Weekday;
use serde::Deserialize;

/// Payload for creating or updating a class, including its optional
/// recurring clinic slot.
#[derive(Debug, Deserialize)]
pub struct ClassRequest {
    pub academy_id: Option<i64>,
    pub name: String,
    pub clinic_weekday: Option<Weekday>,
    pub clinic_time: Option<NaiveTime>,
}
