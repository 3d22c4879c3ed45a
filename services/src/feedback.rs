//! Teacher feedback on graded submissions.

use sea_orm::{DbConn, EntityTrait};

use db::models::{
    student_submission::{Entity as SubmissionEntity, Model as Submission},
    teacher_feedback::{Entity as FeedbackEntity, Model as Feedback},
    test::Entity as TestEntity,
};

use crate::error::{ServiceError, ServiceResult};

pub async fn create_feedback(
    db: &DbConn,
    submission_id: i64,
    teacher_name: &str,
    content: &str,
) -> ServiceResult<Feedback> {
    SubmissionEntity::find_by_id(submission_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("submission", submission_id))?;

    Ok(Feedback::create(db, submission_id, teacher_name, content).await?)
}

pub async fn update_feedback(db: &DbConn, feedback_id: i64, content: &str) -> ServiceResult<Feedback> {
    FeedbackEntity::find_by_id(feedback_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("feedback", feedback_id))?;

    Ok(Feedback::update_content(db, feedback_id, content).await?)
}

pub async fn delete_feedback(db: &DbConn, feedback_id: i64) -> ServiceResult<()> {
    FeedbackEntity::find_by_id(feedback_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("feedback", feedback_id))?;

    Feedback::delete(db, feedback_id).await?;
    Ok(())
}

pub async fn feedback_by_submission(
    db: &DbConn,
    submission_id: i64,
) -> ServiceResult<Vec<Feedback>> {
    SubmissionEntity::find_by_id(submission_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("submission", submission_id))?;

    Ok(Feedback::find_by_submission(db, submission_id).await?)
}

/// All feedback on any of the student's submissions.
pub async fn feedback_by_student(db: &DbConn, student_id: i64) -> ServiceResult<Vec<Feedback>> {
    let submission_ids = Submission::find_by_student(db, student_id)
        .await?
        .into_iter()
        .map(|s| s.id)
        .collect();

    Ok(Feedback::find_by_submission_ids(db, submission_ids).await?)
}

/// All feedback across a test's submissions.
pub async fn feedback_by_test(db: &DbConn, test_id: i64) -> ServiceResult<Vec<Feedback>> {
    TestEntity::find_by_id(test_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("test", test_id))?;

    let submission_ids = Submission::find_by_test(db, test_id)
        .await?
        .into_iter()
        .map(|s| s.id)
        .collect();

    Ok(Feedback::find_by_submission_ids(db, submission_ids).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use db::models::{
        academy::Model as Academy, academy_class::Model as Class, student::Model as Student,
        student_submission::Model as Submission, test::Model as Test,
    };
    use db::test_utils::setup_test_db;

    #[tokio::test]
    async fn feedback_listings_follow_submissions() {
        let db = setup_test_db().await;
        let academy = Academy::create(&db, "Gangnam Math").await.unwrap();
        let class = Class::create(&db, academy.id, "Year 1 Basics", None, None)
            .await
            .unwrap();
        let student = Student::create(&db, class.id, "Minjun Kim", "10", "Seoul High", "1111")
            .await
            .unwrap();
        let test = Test::create(&db, academy.id, class.id, "Quiz").await.unwrap();

        let now = Utc.with_ymd_and_hms(2026, 3, 2, 13, 0, 0).unwrap();
        let submission = Submission::upsert_score(&db, student.id, test.id, 80, now)
            .await
            .unwrap();

        create_feedback(&db, submission.id, "Suhui", "Check question 4 again")
            .await
            .unwrap();

        assert_eq!(feedback_by_submission(&db, submission.id).await.unwrap().len(), 1);
        assert_eq!(feedback_by_student(&db, student.id).await.unwrap().len(), 1);
        assert_eq!(feedback_by_test(&db, test.id).await.unwrap().len(), 1);

        let err = create_feedback(&db, submission.id + 99, "Suhui", "x")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }
}
