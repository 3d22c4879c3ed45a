use serde::Deserialize;
use std::collections::HashMap;

/// Answers keyed by question number. `student_id` may be omitted by
/// students submitting for themselves.
#[derive(Debug, Deserialize)]
pub struct SubmitAnswersRequest {
    pub student_id: Option<i64>,
    pub test_id: i64,
    pub answers: HashMap<i32, String>,
}

#[derive(Debug, Deserialize)]
pub struct SubmissionLookupReq {
    pub student_id: i64,
    pub test_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub teacher_name: String,
    pub content: String,
}
