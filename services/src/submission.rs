//! Test grading engine and submission statistics.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DbConn, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};

use db::models::{
    student::{Column as StudentCol, Entity as StudentEntity},
    student_submission::Model as Submission,
    student_submission_detail::Model as Detail,
    test::{Entity as TestEntity, Model as Test},
    test_question::{self, Model as Question},
};

use crate::error::{ServiceError, ServiceResult};

/// A submission together with its per-question detail rows.
#[derive(Debug, Clone, Serialize)]
pub struct GradedSubmission {
    pub submission: Submission,
    pub details: Vec<Detail>,
}

/// Answer key entry used when (re)keying a test.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionAnswer {
    pub number: i32,
    pub answer: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionRate {
    pub question_number: i32,
    /// Percentage of answered rows that were correct, 0-100.
    pub correct_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentScore {
    pub student_id: i64,
    pub student_name: String,
    pub total_score: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestStats {
    pub test_id: i64,
    pub test_title: String,
    pub average_score: f64,
    pub max_score: i32,
    pub student_scores: Vec<StudentScore>,
    pub question_stats: Vec<QuestionRate>,
}

/// A student's submission enriched with how the rest of the cohort did.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionSummary {
    pub submission: Submission,
    pub class_average: f64,
    pub rank: usize,
}

/// Grades `answers` (question number to answer string) against a test's
/// stored key.
///
/// Questions the student skipped are treated as blank and incorrect. The
/// submission row is upserted for the (student, test) pair, its detail
/// rows fully replaced, and `submitted_at` stamped with `now`; grading the
/// same answers twice yields the same score and detail set.
pub async fn grade_submission(
    db: &DbConn,
    student_id: i64,
    test_id: i64,
    answers: &HashMap<i32, String>,
    now: DateTime<Utc>,
) -> ServiceResult<GradedSubmission> {
    require_student(db, student_id).await?;
    require_test(db, test_id).await?;

    let questions = Question::find_by_test(db, test_id).await?;
    let (total_score, detail_rows) = score_answers(&questions, answers);

    let submission =
        Submission::upsert_score(db, student_id, test_id, total_score, now).await?;
    Detail::replace_for_submission(db, submission.id, detail_rows).await?;

    let details = Detail::find_by_submission(db, submission.id).await?;
    log::info!(
        "graded submission {} for student {student_id} on test {test_id}: {total_score}",
        submission.id
    );

    Ok(GradedSubmission { submission, details })
}

/// Replaces a test's question set with a new answer key and regrades every
/// existing submission against it.
///
/// Point values are assigned by equal division of 100 across the new
/// question count. Stored student answers survive the rekey; detail rows
/// are rebuilt against the new questions, and `submitted_at` is left
/// untouched because nothing was re-submitted.
pub async fn save_test_answers(
    db: &DbConn,
    test_id: i64,
    answers: &[QuestionAnswer],
) -> ServiceResult<Vec<Question>> {
    require_test(db, test_id).await?;

    // Preserve each submission's answers, keyed by question number, before
    // the old question rows (and their cascading details) disappear.
    let old_questions = Question::find_by_test(db, test_id).await?;
    let number_by_id: HashMap<i64, i32> =
        old_questions.iter().map(|q| (q.id, q.number)).collect();

    let submissions = Submission::find_by_test(db, test_id).await?;
    let mut saved_answers: Vec<(i64, HashMap<i32, String>)> =
        Vec::with_capacity(submissions.len());
    for submission in &submissions {
        let details = Detail::find_by_submission(db, submission.id).await?;
        let answers = details
            .into_iter()
            .filter_map(|d| {
                let number = number_by_id.get(&d.question_id)?;
                Some((*number, d.student_answer?))
            })
            .collect();
        saved_answers.push((submission.id, answers));
    }

    Question::delete_by_test(db, test_id).await?;

    let mut sorted: Vec<&QuestionAnswer> = answers.iter().collect();
    sorted.sort_by_key(|a| a.number);

    let points = test_question::equal_division_points(sorted.len());
    let mut questions = Vec::with_capacity(sorted.len());
    for (answer, points) in sorted.iter().zip(points) {
        let question =
            Question::create(db, test_id, answer.number, answer.answer.as_deref(), points)
                .await?;
        questions.push(question);
    }

    for (submission, (submission_id, answers)) in submissions.iter().zip(&saved_answers) {
        let (total_score, detail_rows) = score_answers(&questions, answers);
        Submission::set_score(db, submission.id, total_score).await?;
        Detail::replace_for_submission(db, *submission_id, detail_rows).await?;
        log::debug!(
            "regraded submission {} after rekey of test {test_id}",
            submission.id
        );
    }

    Ok(questions)
}

/// Cohort-wide per-question correct rate for a test, ordered by question
/// number. Blank rows count toward the denominator.
pub async fn question_correct_rates(db: &DbConn, test_id: i64) -> ServiceResult<Vec<QuestionRate>> {
    let questions = Question::find_by_test(db, test_id).await?;
    let number_by_id: HashMap<i64, i32> = questions.iter().map(|q| (q.id, q.number)).collect();

    let mut tallies: HashMap<i32, (u32, u32)> = HashMap::new();
    for submission in Submission::find_by_test(db, test_id).await? {
        for detail in Detail::find_by_submission(db, submission.id).await? {
            let Some(number) = number_by_id.get(&detail.question_id) else {
                continue;
            };
            let tally = tallies.entry(*number).or_insert((0, 0));
            tally.1 += 1;
            if detail.is_correct {
                tally.0 += 1;
            }
        }
    }

    let mut rates: Vec<QuestionRate> = tallies
        .into_iter()
        .map(|(question_number, (correct, answered))| QuestionRate {
            question_number,
            correct_rate: correct as f64 * 100.0 / answered as f64,
        })
        .collect();
    rates.sort_by_key(|r| r.question_number);

    Ok(rates)
}

/// Average, maximum, per-student scores and per-question correct rates.
pub async fn test_stats(db: &DbConn, test_id: i64) -> ServiceResult<TestStats> {
    let test = require_test(db, test_id).await?;

    let submissions = Submission::find_by_test(db, test_id).await?;
    let average_score = mean(submissions.iter().map(|s| s.total_score));
    let max_score = submissions.iter().map(|s| s.total_score).max().unwrap_or(0);

    let student_ids: Vec<i64> = submissions.iter().map(|s| s.student_id).collect();
    let names: HashMap<i64, String> = if student_ids.is_empty() {
        HashMap::new()
    } else {
        StudentEntity::find()
            .filter(StudentCol::Id.is_in(student_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|s| (s.id, s.name))
            .collect()
    };

    let student_scores = submissions
        .iter()
        .map(|s| StudentScore {
            student_id: s.student_id,
            student_name: names.get(&s.student_id).cloned().unwrap_or_default(),
            total_score: s.total_score,
        })
        .collect();

    Ok(TestStats {
        test_id: test.id,
        test_title: test.title,
        average_score,
        max_score,
        student_scores,
        question_stats: question_correct_rates(db, test_id).await?,
    })
}

/// A student's submissions, each with the class average and competition
/// rank for its test.
pub async fn student_submissions(
    db: &DbConn,
    student_id: i64,
) -> ServiceResult<Vec<SubmissionSummary>> {
    require_student(db, student_id).await?;

    let mut summaries = Vec::new();
    for submission in Submission::find_by_student(db, student_id).await? {
        let cohort = Submission::find_by_test(db, submission.test_id).await?;
        let class_average = mean(cohort.iter().map(|s| s.total_score));

        let mut scores: Vec<i32> = cohort.iter().map(|s| s.total_score).collect();
        scores.sort_unstable_by(|a, b| b.cmp(a));
        let rank = scores
            .iter()
            .position(|score| *score == submission.total_score)
            .map(|index| index + 1)
            .unwrap_or(1);

        summaries.push(SubmissionSummary {
            submission,
            class_average,
            rank,
        });
    }

    Ok(summaries)
}

pub async fn submission_with_details(
    db: &DbConn,
    submission_id: i64,
) -> ServiceResult<GradedSubmission> {
    let submission = db::models::student_submission::Entity::find_by_id(submission_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("submission", submission_id))?;

    let details = Detail::find_by_submission(db, submission.id).await?;
    Ok(GradedSubmission { submission, details })
}

pub async fn submission_by_student_and_test(
    db: &DbConn,
    student_id: i64,
    test_id: i64,
) -> ServiceResult<GradedSubmission> {
    let submission = Submission::find_by_student_and_test(db, student_id, test_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("submission", test_id))?;

    let details = Detail::find_by_submission(db, submission.id).await?;
    Ok(GradedSubmission { submission, details })
}

pub async fn test_submissions(db: &DbConn, test_id: i64) -> ServiceResult<Vec<Submission>> {
    require_test(db, test_id).await?;
    Ok(Submission::find_by_test(db, test_id).await?)
}

/// Scores an answer map against a question set.
///
/// Returns the rounded 0-100 score plus one detail row per question in
/// number order. A question is correct only when it has a stored answer
/// equal (exact string comparison) to the submitted one.
fn score_answers(
    questions: &[Question],
    answers: &HashMap<i32, String>,
) -> (i32, Vec<(i64, Option<String>, bool)>) {
    let mut earned_points = 0.0;
    let mut total_points = 0.0;
    let mut details = Vec::with_capacity(questions.len());

    for question in questions {
        let submitted = answers.get(&question.number);
        let is_correct = match (&question.answer, submitted) {
            (Some(key), Some(answer)) => key == answer,
            _ => false,
        };

        total_points += question.points;
        if is_correct {
            earned_points += question.points;
        }

        details.push((question.id, submitted.cloned(), is_correct));
    }

    let total_score = if total_points == 0.0 {
        0
    } else {
        (earned_points * 100.0 / total_points).round() as i32
    };

    (total_score, details)
}

fn mean(scores: impl Iterator<Item = i32>) -> f64 {
    let (sum, count) = scores.fold((0i64, 0u32), |(sum, count), score| {
        (sum + score as i64, count + 1)
    });
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

async fn require_student(db: &DbConn, student_id: i64) -> ServiceResult<()> {
    StudentEntity::find_by_id(student_id)
        .one(db)
        .await?
        .map(|_| ())
        .ok_or_else(|| ServiceError::not_found("student", student_id))
}

async fn require_test(db: &DbConn, test_id: i64) -> ServiceResult<Test> {
    TestEntity::find_by_id(test_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("test", test_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use db::models::{
        academy::Model as Academy, academy_class::Model as Class, student::Model as Student,
        test::Model as Test,
    };
    use db::test_utils::setup_test_db;

    async fn fixture(db: &DbConn) -> (Student, Test) {
        let academy = Academy::create(db, "Gangnam Math").await.unwrap();
        let class = Class::create(db, academy.id, "Year 1 Basics", None, None)
            .await
            .unwrap();
        let student = Student::create(db, class.id, "Minjun Kim", "10", "Seoul High", "1111")
            .await
            .unwrap();
        let test = Test::create(db, academy.id, class.id, "Week 1 Quiz")
            .await
            .unwrap();
        (student, test)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 13, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn three_question_weighted_grading() {
        let db = setup_test_db().await;
        let (student, test) = fixture(&db).await;

        for (number, answer, points) in [(1, "3", 34.0), (2, "5", 33.0), (3, "7", 33.0)] {
            Question::create(&db, test.id, number, Some(answer), points)
                .await
                .unwrap();
        }

        let answers = HashMap::from([
            (1, "3".to_string()),
            (2, "5".to_string()),
            (3, "9".to_string()),
        ]);

        let graded = grade_submission(&db, student.id, test.id, &answers, now())
            .await
            .unwrap();

        // 67 of 100 points earned, rounded.
        assert_eq!(graded.submission.total_score, 67);
        assert_eq!(graded.details.len(), 3);
        assert!(graded.details.iter().filter(|d| d.is_correct).count() == 2);
    }

    #[tokio::test]
    async fn regrading_identical_answers_is_idempotent() {
        let db = setup_test_db().await;
        let (student, test) = fixture(&db).await;

        for (number, answer) in [(1, "a"), (2, "b")] {
            Question::create(&db, test.id, number, Some(answer), 50.0)
                .await
                .unwrap();
        }

        let answers = HashMap::from([(1, "a".to_string()), (2, "x".to_string())]);

        let first = grade_submission(&db, student.id, test.id, &answers, now())
            .await
            .unwrap();
        let second = grade_submission(&db, student.id, test.id, &answers, now())
            .await
            .unwrap();

        assert_eq!(first.submission.id, second.submission.id);
        assert_eq!(first.submission.total_score, second.submission.total_score);
        assert_eq!(first.details.len(), second.details.len());

        let correctness = |details: &[Detail]| {
            let mut set: Vec<(i64, bool)> =
                details.iter().map(|d| (d.question_id, d.is_correct)).collect();
            set.sort_unstable();
            set
        };
        assert_eq!(correctness(&first.details), correctness(&second.details));
    }

    #[tokio::test]
    async fn blank_answers_score_zero_against_missing_key() {
        let db = setup_test_db().await;
        let (student, test) = fixture(&db).await;

        // A question with no stored answer can never be correct.
        Question::create(&db, test.id, 1, None, 100.0).await.unwrap();

        let answers = HashMap::from([(1, "anything".to_string())]);
        let graded = grade_submission(&db, student.id, test.id, &answers, now())
            .await
            .unwrap();

        assert_eq!(graded.submission.total_score, 0);
        assert!(!graded.details[0].is_correct);
    }

    #[tokio::test]
    async fn test_without_questions_scores_zero() {
        let db = setup_test_db().await;
        let (student, test) = fixture(&db).await;

        let graded = grade_submission(&db, student.id, test.id, &HashMap::new(), now())
            .await
            .unwrap();
        assert_eq!(graded.submission.total_score, 0);
        assert!(graded.details.is_empty());
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let db = setup_test_db().await;
        let (student, test) = fixture(&db).await;

        let err = grade_submission(&db, student.id + 99, test.id, &HashMap::new(), now())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { entity: "student", .. }));

        let err = grade_submission(&db, student.id, test.id + 99, &HashMap::new(), now())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { entity: "test", .. }));
    }

    #[tokio::test]
    async fn rekeying_regrades_existing_submissions() {
        let db = setup_test_db().await;
        let (student, test) = fixture(&db).await;

        for (number, answer) in [(1, "a"), (2, "b")] {
            Question::create(&db, test.id, number, Some(answer), 50.0)
                .await
                .unwrap();
        }

        let answers = HashMap::from([(1, "a".to_string()), (2, "c".to_string())]);
        let graded = grade_submission(&db, student.id, test.id, &answers, now())
            .await
            .unwrap();
        assert_eq!(graded.submission.total_score, 50);

        // New key makes the student's stored second answer correct too.
        let new_key = vec![
            QuestionAnswer {
                number: 1,
                answer: Some("a".into()),
            },
            QuestionAnswer {
                number: 2,
                answer: Some("c".into()),
            },
        ];
        let questions = save_test_answers(&db, test.id, &new_key).await.unwrap();
        assert_eq!(questions.len(), 2);
        let total: f64 = questions.iter().map(|q| q.points).sum();
        assert!((total - 100.0).abs() < 1e-9);

        let regraded = submission_by_student_and_test(&db, student.id, test.id)
            .await
            .unwrap();
        assert_eq!(regraded.submission.total_score, 100);
        assert_eq!(regraded.submission.submitted_at, graded.submission.submitted_at);
    }

    #[tokio::test]
    async fn correct_rates_count_blanks_in_denominator() {
        let db = setup_test_db().await;
        let (student, test) = fixture(&db).await;
        let other = Student::create(&db, student.class_id, "Seoyeon Lee", "10", "Seoul High", "1112")
            .await
            .unwrap();

        for (number, answer) in [(1, "a"), (2, "b")] {
            Question::create(&db, test.id, number, Some(answer), 50.0)
                .await
                .unwrap();
        }

        let full = HashMap::from([(1, "a".to_string()), (2, "b".to_string())]);
        // Second student answers only question 1, wrongly.
        let partial = HashMap::from([(1, "z".to_string())]);

        grade_submission(&db, student.id, test.id, &full, now())
            .await
            .unwrap();
        grade_submission(&db, other.id, test.id, &partial, now())
            .await
            .unwrap();

        let rates = question_correct_rates(&db, test.id).await.unwrap();
        assert_eq!(rates.len(), 2);
        assert_eq!(rates[0].question_number, 1);
        assert!((rates[0].correct_rate - 50.0).abs() < 1e-9);
        // Question 2: one correct, one blank row.
        assert!((rates[1].correct_rate - 50.0).abs() < 1e-9);
    }
}
