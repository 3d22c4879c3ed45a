//! Read-only daily feedback view for a student and lesson.
//!
//! Composes homework summaries, the lesson's test result, and the
//! instructor's note; absent pieces are simply omitted rather than
//! erroring.

use chrono::NaiveDate;
use sea_orm::{DbConn, EntityTrait};
use serde::Serialize;

use db::models::{
    homework::Model as Homework,
    lesson::{Entity as LessonEntity, Model as Lesson},
    student::Entity as StudentEntity,
    student_homework::Model as StudentHomework,
    student_lesson::Model as StudentLesson,
    student_submission::Model as Submission,
    student_submission_detail::Model as Detail,
    test::Model as Test,
    test_question::Model as Question,
};

use crate::error::{ServiceError, ServiceResult};
use crate::submission::{question_correct_rates, QuestionRate};

#[derive(Debug, Clone, Serialize)]
pub struct HomeworkSummary {
    pub homework_id: i64,
    pub homework_title: String,
    pub question_count: i32,
    pub incorrect_count: Option<i32>,
    pub completion: Option<i32>,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestFeedback {
    pub test_id: i64,
    pub test_title: String,
    pub student_score: i32,
    /// Question numbers the student missed, ascending.
    pub incorrect_questions: Vec<i32>,
    /// Cohort-wide per-question correct rates for the whole test.
    pub question_accuracy_rates: Vec<QuestionRate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyFeedback {
    pub lesson_id: i64,
    pub lesson_date: NaiveDate,
    pub today_homeworks: Vec<HomeworkSummary>,
    pub next_homeworks: Vec<HomeworkSummary>,
    pub today_test: Option<TestFeedback>,
    pub instructor_feedback: Option<String>,
    pub feedback_author: Option<String>,
}

/// Resolves today's lesson for the student's class, then assembles the
/// daily feedback for it.
pub async fn today_feedback(
    db: &DbConn,
    student_id: i64,
    today: NaiveDate,
) -> ServiceResult<DailyFeedback> {
    let student = StudentEntity::find_by_id(student_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("student", student_id))?;

    let class = db::models::academy_class::Entity::find_by_id(student.class_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("class", student.class_id))?;

    let lesson = Lesson::find_by_class_and_date(db, class.academy_id, class.id, today)
        .await?
        .ok_or_else(|| ServiceError::invalid("No lesson scheduled for today"))?;

    daily_feedback(db, student_id, lesson.id).await
}

pub async fn daily_feedback(
    db: &DbConn,
    student_id: i64,
    lesson_id: i64,
) -> ServiceResult<DailyFeedback> {
    StudentEntity::find_by_id(student_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("student", student_id))?;
    let lesson = LessonEntity::find_by_id(lesson_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("lesson", lesson_id))?;

    let today_homeworks = homework_summaries(db, student_id, lesson.id).await?;

    let next_lessons = Lesson::find_next_after(db, lesson.class_id, lesson.lesson_date).await?;
    let next_homeworks = match next_lessons.first() {
        Some(next) => homework_summaries(db, student_id, next.id).await?,
        None => Vec::new(),
    };

    let today_test = match Test::find_by_lesson(db, lesson.id).await? {
        Some(test) => test_feedback(db, student_id, &test).await?,
        None => None,
    };

    let note = StudentLesson::find_by_student_and_lesson(db, student_id, lesson.id).await?;

    Ok(DailyFeedback {
        lesson_id: lesson.id,
        lesson_date: lesson.lesson_date,
        today_homeworks,
        next_homeworks,
        today_test,
        instructor_feedback: note.as_ref().and_then(|n| n.instructor_feedback.clone()),
        feedback_author: note.and_then(|n| n.feedback_author),
    })
}

/// Upserts the instructor's note for the (student, lesson) pair.
pub async fn update_instructor_feedback(
    db: &DbConn,
    student_id: i64,
    lesson_id: i64,
    feedback: &str,
    author: &str,
) -> ServiceResult<StudentLesson> {
    StudentEntity::find_by_id(student_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("student", student_id))?;
    LessonEntity::find_by_id(lesson_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("lesson", lesson_id))?;

    Ok(StudentLesson::upsert_feedback(db, student_id, lesson_id, feedback, author).await?)
}

async fn homework_summaries(
    db: &DbConn,
    student_id: i64,
    lesson_id: i64,
) -> ServiceResult<Vec<HomeworkSummary>> {
    let mut summaries = Vec::new();

    for homework in Homework::find_by_lesson(db, lesson_id).await? {
        let row =
            StudentHomework::find_by_student_and_homework(db, student_id, homework.id).await?;

        summaries.push(HomeworkSummary {
            homework_id: homework.id,
            homework_title: homework.title.clone(),
            question_count: homework.question_count,
            incorrect_count: row.as_ref().and_then(|r| r.incorrect_count),
            completion: row.as_ref().and_then(|r| r.completion(homework.question_count)),
            due_date: homework.due_date,
        });
    }

    Ok(summaries)
}

async fn test_feedback(
    db: &DbConn,
    student_id: i64,
    test: &Test,
) -> ServiceResult<Option<TestFeedback>> {
    let Some(submission) = Submission::find_by_student_and_test(db, student_id, test.id).await?
    else {
        return Ok(None);
    };

    let questions = Question::find_by_test(db, test.id).await?;
    let details = Detail::find_by_submission(db, submission.id).await?;

    let mut incorrect_questions: Vec<i32> = details
        .iter()
        .filter(|d| !d.is_correct)
        .filter_map(|d| questions.iter().find(|q| q.id == d.question_id))
        .map(|q| q.number)
        .collect();
    incorrect_questions.sort_unstable();

    Ok(Some(TestFeedback {
        test_id: test.id,
        test_title: test.title.clone(),
        student_score: submission.total_score,
        incorrect_questions,
        question_accuracy_rates: question_correct_rates(db, test.id).await?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::grade_submission;
    use chrono::{TimeZone, Utc};
    use db::models::{
        academy::Model as Academy, academy_class::Model as Class, student::Model as Student,
    };
    use db::test_utils::setup_test_db;
    use std::collections::HashMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn missing_pieces_are_omitted() {
        let db = setup_test_db().await;
        let academy = Academy::create(&db, "Gangnam Math").await.unwrap();
        let class = Class::create(&db, academy.id, "Year 1 Basics", None, None)
            .await
            .unwrap();
        let student = Student::create(&db, class.id, "Minjun Kim", "10", "Seoul High", "1111")
            .await
            .unwrap();
        let lesson = Lesson::create(&db, academy.id, class.id, date(2026, 3, 2))
            .await
            .unwrap();

        let view = daily_feedback(&db, student.id, lesson.id).await.unwrap();
        assert!(view.today_homeworks.is_empty());
        assert!(view.next_homeworks.is_empty());
        assert!(view.today_test.is_none());
        assert!(view.instructor_feedback.is_none());
    }

    #[tokio::test]
    async fn assembles_homework_test_and_note() {
        let db = setup_test_db().await;
        let academy = Academy::create(&db, "Gangnam Math").await.unwrap();
        let class = Class::create(&db, academy.id, "Year 1 Basics", None, None)
            .await
            .unwrap();
        let student = Student::create(&db, class.id, "Minjun Kim", "10", "Seoul High", "1111")
            .await
            .unwrap();

        let lesson = Lesson::create(&db, academy.id, class.id, date(2026, 3, 2))
            .await
            .unwrap();
        let next_lesson = Lesson::create(&db, academy.id, class.id, date(2026, 3, 4))
            .await
            .unwrap();

        // Today's homework, graded at 85.
        let homework = Homework::create(&db, academy.id, class.id, "Workbook", 20, None, None)
            .await
            .unwrap();
        Homework::set_lesson(&db, homework.id, Some(lesson.id))
            .await
            .unwrap();
        let row = StudentHomework::assign(&db, student.id, homework.id)
            .await
            .unwrap();
        StudentHomework::set_counts(&db, row.id, Some(3), Some(0))
            .await
            .unwrap();

        // Next lesson's homework, unassigned to the student.
        let upcoming = Homework::create(&db, academy.id, class.id, "Prep sheet", 10, None, None)
            .await
            .unwrap();
        Homework::set_lesson(&db, upcoming.id, Some(next_lesson.id))
            .await
            .unwrap();

        // Attached test: student misses questions 1 and 3.
        let test = Test::create(&db, academy.id, class.id, "Quiz").await.unwrap();
        Test::set_lesson(&db, test.id, Some(lesson.id)).await.unwrap();
        for (number, answer) in [(1, "a"), (2, "b"), (3, "c")] {
            Question::create(&db, test.id, number, Some(answer), 0.0)
                .await
                .unwrap();
        }
        let answers = HashMap::from([
            (1, "x".to_string()),
            (2, "b".to_string()),
            (3, "y".to_string()),
        ]);
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 13, 0, 0).unwrap();
        grade_submission(&db, student.id, test.id, &answers, now)
            .await
            .unwrap();

        update_instructor_feedback(&db, student.id, lesson.id, "Focus on factoring", "Suhui")
            .await
            .unwrap();

        let view = daily_feedback(&db, student.id, lesson.id).await.unwrap();

        assert_eq!(view.today_homeworks.len(), 1);
        assert_eq!(view.today_homeworks[0].completion, Some(85));
        assert_eq!(view.next_homeworks.len(), 1);
        assert_eq!(view.next_homeworks[0].completion, None);

        let test_view = view.today_test.unwrap();
        assert_eq!(test_view.incorrect_questions, vec![1, 3]);
        assert_eq!(test_view.question_accuracy_rates.len(), 3);

        assert_eq!(view.instructor_feedback.as_deref(), Some("Focus on factoring"));
        assert_eq!(view.feedback_author.as_deref(), Some("Suhui"));
    }

    #[tokio::test]
    async fn note_upsert_reuses_the_row() {
        let db = setup_test_db().await;
        let academy = Academy::create(&db, "Gangnam Math").await.unwrap();
        let class = Class::create(&db, academy.id, "Year 1 Basics", None, None)
            .await
            .unwrap();
        let student = Student::create(&db, class.id, "Minjun Kim", "10", "Seoul High", "1111")
            .await
            .unwrap();
        let lesson = Lesson::create(&db, academy.id, class.id, date(2026, 3, 2))
            .await
            .unwrap();

        let first = update_instructor_feedback(&db, student.id, lesson.id, "v1", "Suhui")
            .await
            .unwrap();
        let second = update_instructor_feedback(&db, student.id, lesson.id, "v2", "Suhui")
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.instructor_feedback.as_deref(), Some("v2"));
    }

    #[tokio::test]
    async fn today_requires_a_scheduled_lesson() {
        let db = setup_test_db().await;
        let academy = Academy::create(&db, "Gangnam Math").await.unwrap();
        let class = Class::create(&db, academy.id, "Year 1 Basics", None, None)
            .await
            .unwrap();
        let student = Student::create(&db, class.id, "Minjun Kim", "10", "Seoul High", "1111")
            .await
            .unwrap();

        let err = today_feedback(&db, student.id, date(2026, 3, 2))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidState(_)));
    }
}
