use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateFeedbackRequest {
    pub submission_id: i64,
    pub teacher_name: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct EditFeedbackRequest {
    pub content: String,
}
