use serde::Deserialize;
use services::submission::QuestionAnswer;

#[derive(Debug, Deserialize)]
pub struct CreateTestRequest {
    pub academy_id: i64,
    pub class_id: i64,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct EditTestRequest {
    pub title: String,
}

/// Full answer key for a test; replaces the existing question set.
#[derive(Debug, Deserialize)]
pub struct TestAnswersRequest {
    pub answers: Vec<QuestionAnswer>,
}

#[derive(Debug, Deserialize)]
pub struct AddQuestionRequest {
    pub number: i32,
    pub answer: Option<String>,
    pub points: Option<f64>,
}
