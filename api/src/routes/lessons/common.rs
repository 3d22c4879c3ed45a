use chrono::NaiveDate;
use serde::Deserialize;
use services::lesson::HomeworkAssignment;

#[derive(Debug, Deserialize)]
pub struct CreateLessonRequest {
    pub academy_id: i64,
    pub class_id: i64,
    pub lesson_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct LessonContentRequest {
    pub common_feedback: Option<String>,
    pub announcement: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AssignHomeworksRequest {
    pub assignments: Vec<HomeworkAssignment>,
}
