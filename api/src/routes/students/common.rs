use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub class_id: i64,
    pub name: String,
    pub grade: String,
    pub school: String,
    pub pin: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub class_id: i64,
    pub name: String,
    pub grade: String,
    pub school: String,
}
