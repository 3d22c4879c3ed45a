//! Lesson lifecycle, test/homework attachment, and roster statistics.

use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::{DbConn, EntityTrait};
use serde::{Deserialize, Serialize};

use db::models::{
    academy::Entity as AcademyEntity,
    academy_class::Entity as ClassEntity,
    homework::{Entity as HomeworkEntity, Model as Homework},
    lesson::{Entity as LessonEntity, Model as Lesson},
    student::{Entity as StudentEntity, Model as Student},
    student_homework::Model as StudentHomework,
    student_submission::Model as Submission,
    test::{Entity as TestEntity, Model as Test},
};

use crate::error::{ServiceError, ServiceResult};

#[derive(Debug, Clone, Serialize)]
pub struct StudentTestScore {
    pub student_id: i64,
    pub student_name: String,
    pub score: Option<i32>,
    pub submitted: bool,
    /// Standard competition rank among submitted scores; None for
    /// non-submitters.
    pub rank: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentHomeworkCompletion {
    pub student_id: i64,
    pub student_name: String,
    pub incorrect_count: Option<i32>,
    pub unsolved_count: Option<i32>,
    pub completion: Option<i32>,
    pub completed: bool,
    pub total_questions: i32,
}

/// Roster-wide lesson statistics. The test and homework sections are
/// empty when nothing is attached.
#[derive(Debug, Clone, Serialize)]
pub struct LessonStudentStats {
    pub test_scores: Vec<StudentTestScore>,
    pub test_average: Option<f64>,
    pub homework_completions: Vec<StudentHomeworkCompletion>,
    pub homework_average: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HomeworkAssignment {
    pub student_id: i64,
    pub homework_id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentAssignmentView {
    pub student_id: i64,
    pub student_name: String,
    pub assigned_homework_id: Option<i64>,
    pub assigned_homework_title: Option<String>,
    pub incorrect_count: Option<i32>,
    pub completion: Option<i32>,
}

/// Idempotent lookup used by the test/homework workflows when a lesson
/// for the date may not exist yet.
pub async fn get_or_create_lesson(
    db: &DbConn,
    academy_id: i64,
    class_id: i64,
    lesson_date: NaiveDate,
) -> ServiceResult<Lesson> {
    if let Some(existing) =
        Lesson::find_by_class_and_date(db, academy_id, class_id, lesson_date).await?
    {
        return Ok(existing);
    }
    create_lesson(db, academy_id, class_id, lesson_date).await
}

pub async fn create_lesson(
    db: &DbConn,
    academy_id: i64,
    class_id: i64,
    lesson_date: NaiveDate,
) -> ServiceResult<Lesson> {
    AcademyEntity::find_by_id(academy_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("academy", academy_id))?;
    ClassEntity::find_by_id(class_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("class", class_id))?;

    if Lesson::find_by_class_and_date(db, academy_id, class_id, lesson_date)
        .await?
        .is_some()
    {
        return Err(ServiceError::invalid(
            "A lesson already exists for this class and date",
        ));
    }

    Ok(Lesson::create(db, academy_id, class_id, lesson_date).await?)
}

pub async fn get_lesson(db: &DbConn, lesson_id: i64) -> ServiceResult<Lesson> {
    require_lesson(db, lesson_id).await
}

pub async fn lessons_by_class(db: &DbConn, class_id: i64) -> ServiceResult<Vec<Lesson>> {
    Ok(Lesson::find_by_class(db, class_id).await?)
}

pub async fn lessons_by_student(db: &DbConn, student_id: i64) -> ServiceResult<Vec<Lesson>> {
    let student = StudentEntity::find_by_id(student_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("student", student_id))?;

    Ok(Lesson::find_by_class(db, student.class_id).await?)
}

/// Refused while a test or any homework is still attached.
pub async fn delete_lesson(db: &DbConn, lesson_id: i64) -> ServiceResult<()> {
    require_lesson(db, lesson_id).await?;

    if Test::find_by_lesson(db, lesson_id).await?.is_some() {
        return Err(ServiceError::invalid(
            "Cannot delete a lesson with an attached test",
        ));
    }
    if !Homework::find_by_lesson(db, lesson_id).await?.is_empty() {
        return Err(ServiceError::invalid(
            "Cannot delete a lesson with attached homework",
        ));
    }

    Lesson::delete(db, lesson_id).await?;
    Ok(())
}

/// Attaches a test to a lesson. The test must be free, belong to the same
/// academy and class, and the lesson must not already carry one.
pub async fn attach_test(db: &DbConn, lesson_id: i64, test_id: i64) -> ServiceResult<Lesson> {
    let lesson = require_lesson(db, lesson_id).await?;
    let test = TestEntity::find_by_id(test_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("test", test_id))?;

    if let Some(attached_to) = test.lesson_id {
        if attached_to != lesson_id {
            return Err(ServiceError::invalid(
                "Test is already attached to another lesson",
            ));
        }
    }

    if test.academy_id != lesson.academy_id || test.class_id != lesson.class_id {
        return Err(ServiceError::invalid(
            "Test must belong to the same academy and class as the lesson",
        ));
    }

    if let Some(existing) = Test::find_by_lesson(db, lesson_id).await? {
        if existing.id != test_id {
            return Err(ServiceError::invalid("Lesson already has a test attached"));
        }
    }

    Test::set_lesson(db, test_id, Some(lesson_id)).await?;
    require_lesson(db, lesson_id).await
}

pub async fn detach_test(db: &DbConn, lesson_id: i64) -> ServiceResult<Lesson> {
    require_lesson(db, lesson_id).await?;

    if let Some(test) = Test::find_by_lesson(db, lesson_id).await? {
        Test::set_lesson(db, test.id, None).await?;
    }

    require_lesson(db, lesson_id).await
}

pub async fn attach_homework(
    db: &DbConn,
    lesson_id: i64,
    homework_id: i64,
) -> ServiceResult<Lesson> {
    let lesson = require_lesson(db, lesson_id).await?;
    let homework = HomeworkEntity::find_by_id(homework_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("homework", homework_id))?;

    if let Some(attached_to) = homework.lesson_id {
        if attached_to != lesson_id {
            return Err(ServiceError::invalid(
                "Homework is already attached to another lesson",
            ));
        }
    }

    if homework.academy_id != lesson.academy_id || homework.class_id != lesson.class_id {
        return Err(ServiceError::invalid(
            "Homework must belong to the same academy and class as the lesson",
        ));
    }

    Homework::set_lesson(db, homework_id, Some(lesson_id)).await?;
    require_lesson(db, lesson_id).await
}

pub async fn remove_homework(
    db: &DbConn,
    lesson_id: i64,
    homework_id: i64,
) -> ServiceResult<Lesson> {
    require_lesson(db, lesson_id).await?;
    let homework = HomeworkEntity::find_by_id(homework_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("homework", homework_id))?;

    if homework.lesson_id != Some(lesson_id) {
        return Err(ServiceError::invalid(
            "Homework is not attached to this lesson",
        ));
    }

    Homework::set_lesson(db, homework_id, None).await?;
    require_lesson(db, lesson_id).await
}

pub async fn update_lesson_content(
    db: &DbConn,
    lesson_id: i64,
    common_feedback: Option<String>,
    announcement: Option<String>,
) -> ServiceResult<Lesson> {
    require_lesson(db, lesson_id).await?;
    Ok(Lesson::update_content(db, lesson_id, common_feedback, announcement).await?)
}

pub async fn lesson_homeworks(db: &DbConn, lesson_id: i64) -> ServiceResult<Vec<Homework>> {
    require_lesson(db, lesson_id).await?;
    Ok(Homework::find_by_lesson(db, lesson_id).await?)
}

/// Roster-wide test ranking and homework completion for a lesson.
///
/// Students without a submission sort last and carry no rank; ties share a
/// rank and the next distinct score skips ahead by the tie-group size.
/// Averages cover submitted scores / concrete completions only.
pub async fn lesson_student_stats(
    db: &DbConn,
    lesson_id: i64,
) -> ServiceResult<LessonStudentStats> {
    let lesson = require_lesson(db, lesson_id).await?;
    let roster = Student::find_by_class(db, lesson.class_id).await?;

    let mut stats = LessonStudentStats {
        test_scores: Vec::new(),
        test_average: None,
        homework_completions: Vec::new(),
        homework_average: None,
    };

    if let Some(test) = Test::find_by_lesson(db, lesson_id).await? {
        let submissions = Submission::find_by_test(db, test.id).await?;
        let by_student: HashMap<i64, &Submission> =
            submissions.iter().map(|s| (s.student_id, s)).collect();

        let mut scores: Vec<StudentTestScore> = roster
            .iter()
            .map(|student| {
                let submission = by_student.get(&student.id);
                StudentTestScore {
                    student_id: student.id,
                    student_name: student.name.clone(),
                    score: submission.map(|s| s.total_score),
                    submitted: submission.is_some(),
                    rank: None,
                }
            })
            .collect();

        rank_test_scores(&mut scores);

        let submitted: Vec<i32> = submissions.iter().map(|s| s.total_score).collect();
        stats.test_average = Some(mean(&submitted));
        stats.test_scores = scores;
    }

    let homeworks = Homework::find_by_lesson(db, lesson_id).await?;
    if !homeworks.is_empty() {
        let question_counts: HashMap<i64, i32> =
            homeworks.iter().map(|h| (h.id, h.question_count)).collect();
        let homework_ids: Vec<i64> = homeworks.iter().map(|h| h.id).collect();

        let rows = StudentHomework::find_by_homework_ids(db, homework_ids).await?;
        let by_student: HashMap<i64, &StudentHomework> =
            rows.iter().map(|r| (r.student_id, r)).collect();

        let mut completions: Vec<StudentHomeworkCompletion> = roster
            .iter()
            .map(|student| {
                let row = by_student.get(&student.id);
                let total_questions = row
                    .and_then(|r| question_counts.get(&r.homework_id).copied())
                    .unwrap_or(0);
                StudentHomeworkCompletion {
                    student_id: student.id,
                    student_name: student.name.clone(),
                    incorrect_count: row.and_then(|r| r.incorrect_count),
                    unsolved_count: row.and_then(|r| r.unsolved_count),
                    completion: row.and_then(|r| r.completion(total_questions)),
                    completed: row.is_some(),
                    total_questions,
                }
            })
            .collect();

        // Completion descending, unassigned/ungraded last.
        completions.sort_by(|a, b| match (a.completion, b.completion) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });

        let concrete: Vec<i32> = rows
            .iter()
            .filter_map(|r| {
                question_counts
                    .get(&r.homework_id)
                    .and_then(|count| r.completion(*count))
            })
            .collect();
        stats.homework_average = Some(mean(&concrete));
        stats.homework_completions = completions;
    }

    Ok(stats)
}

/// Assigns lesson homeworks to students, one homework per student.
///
/// Re-assignment replaces the previous row while it is still ungraded;
/// once graded the assignment is locked. Assigning the same homework
/// again is a no-op.
pub async fn assign_homeworks(
    db: &DbConn,
    lesson_id: i64,
    assignments: &[HomeworkAssignment],
) -> ServiceResult<()> {
    require_lesson(db, lesson_id).await?;

    let lesson_homeworks = Homework::find_by_lesson(db, lesson_id).await?;
    let lesson_homework_ids: Vec<i64> = lesson_homeworks.iter().map(|h| h.id).collect();

    for assignment in assignments {
        if !lesson_homework_ids.contains(&assignment.homework_id) {
            return Err(ServiceError::invalid(format!(
                "Homework {} is not attached to this lesson",
                assignment.homework_id
            )));
        }

        let student = StudentEntity::find_by_id(assignment.student_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("student", assignment.student_id))?;

        let existing = StudentHomework::find_by_homework_ids(db, lesson_homework_ids.clone())
            .await?
            .into_iter()
            .find(|row| row.student_id == assignment.student_id);

        if let Some(existing) = existing {
            if existing.homework_id == assignment.homework_id {
                continue;
            }

            if existing.incorrect_count.is_some() {
                return Err(ServiceError::invalid(format!(
                    "Student {} has already submitted their assigned homework; \
                     a graded assignment cannot be changed",
                    student.name
                )));
            }

            StudentHomework::delete(db, existing.id).await?;
        }

        StudentHomework::assign(db, assignment.student_id, assignment.homework_id).await?;
    }

    Ok(())
}

/// Roster-wide assignment listing for a lesson's homework set.
pub async fn get_assignments(
    db: &DbConn,
    lesson_id: i64,
) -> ServiceResult<Vec<StudentAssignmentView>> {
    let lesson = require_lesson(db, lesson_id).await?;
    let roster = Student::find_by_class(db, lesson.class_id).await?;

    let homeworks = Homework::find_by_lesson(db, lesson_id).await?;
    let titles: HashMap<i64, (&str, i32)> = homeworks
        .iter()
        .map(|h| (h.id, (h.title.as_str(), h.question_count)))
        .collect();
    let homework_ids: Vec<i64> = homeworks.iter().map(|h| h.id).collect();

    let rows = StudentHomework::find_by_homework_ids(db, homework_ids).await?;
    let by_student: HashMap<i64, &StudentHomework> =
        rows.iter().map(|r| (r.student_id, r)).collect();

    Ok(roster
        .iter()
        .map(|student| {
            let row = by_student.get(&student.id);
            let assigned = row.and_then(|r| titles.get(&r.homework_id).copied());
            StudentAssignmentView {
                student_id: student.id,
                student_name: student.name.clone(),
                assigned_homework_id: row.map(|r| r.homework_id),
                assigned_homework_title: assigned.map(|(title, _)| title.to_owned()),
                incorrect_count: row.and_then(|r| r.incorrect_count),
                completion: row
                    .zip(assigned)
                    .and_then(|(r, (_, count))| r.completion(count)),
            }
        })
        .collect())
}

/// Standard competition ranking in place: entries must already be sorted
/// score-descending with non-submitters last.
fn rank_test_scores(scores: &mut [StudentTestScore]) {
    scores.sort_by(|a, b| match (a.score, b.score) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    let mut rank = 0;
    let mut prev_score: Option<i32> = None;
    for (index, entry) in scores.iter_mut().enumerate() {
        let Some(score) = entry.score else {
            break;
        };
        if prev_score != Some(score) {
            rank = index + 1;
            prev_score = Some(score);
        }
        entry.rank = Some(rank);
    }
}

fn mean(values: &[i32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|v| *v as i64).sum::<i64>() as f64 / values.len() as f64
}

async fn require_lesson(db: &DbConn, lesson_id: i64) -> ServiceResult<Lesson> {
    LessonEntity::find_by_id(lesson_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("lesson", lesson_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use db::models::{
        academy::Model as Academy, academy_class::Model as Class, test_question::Model as Question,
    };
    use db::test_utils::setup_test_db;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn class_with_students(db: &DbConn, count: usize) -> (Academy, Class, Vec<Student>) {
        let academy = Academy::create(db, "Gangnam Math").await.unwrap();
        let class = Class::create(db, academy.id, "Year 1 Basics", None, None)
            .await
            .unwrap();

        let mut students = Vec::new();
        for i in 0..count {
            let student = Student::create(
                db,
                class.id,
                &format!("Student {i}"),
                "10",
                "Seoul High",
                "0000",
            )
            .await
            .unwrap();
            students.push(student);
        }
        (academy, class, students)
    }

    #[tokio::test]
    async fn competition_ranking_ties_then_skip() {
        let db = setup_test_db().await;
        let (academy, class, students) = class_with_students(&db, 4).await;

        let lesson = create_lesson(&db, academy.id, class.id, date(2026, 3, 2))
            .await
            .unwrap();
        let test = Test::create(&db, academy.id, class.id, "Quiz").await.unwrap();
        attach_test(&db, lesson.id, test.id).await.unwrap();
        Question::create(&db, test.id, 1, Some("a"), 100.0)
            .await
            .unwrap();

        // Scores 90, 90, 80; the fourth student never submits.
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 13, 0, 0).unwrap();
        for (student, score) in students.iter().take(3).zip([90, 90, 80]) {
            Submission::upsert_score(&db, student.id, test.id, score, now)
                .await
                .unwrap();
        }

        let stats = lesson_student_stats(&db, lesson.id).await.unwrap();
        let ranks: Vec<Option<usize>> = stats.test_scores.iter().map(|s| s.rank).collect();
        assert_eq!(ranks, vec![Some(1), Some(1), Some(3), None]);
        assert!(!stats.test_scores[3].submitted);

        // Average over submitted scores only.
        let avg = stats.test_average.unwrap();
        assert!((avg - (90.0 + 90.0 + 80.0) / 3.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn homework_view_sorts_nulls_last() {
        let db = setup_test_db().await;
        let (academy, class, students) = class_with_students(&db, 3).await;

        let lesson = create_lesson(&db, academy.id, class.id, date(2026, 3, 2))
            .await
            .unwrap();
        let homework = Homework::create(&db, academy.id, class.id, "Workbook", 20, None, None)
            .await
            .unwrap();
        attach_homework(&db, lesson.id, homework.id).await.unwrap();

        // One graded at 85, one assigned but ungraded, one unassigned.
        let graded = StudentHomework::assign(&db, students[0].id, homework.id)
            .await
            .unwrap();
        StudentHomework::set_counts(&db, graded.id, Some(3), Some(0))
            .await
            .unwrap();
        StudentHomework::assign(&db, students[1].id, homework.id)
            .await
            .unwrap();

        let stats = lesson_student_stats(&db, lesson.id).await.unwrap();
        let completions: Vec<Option<i32>> = stats
            .homework_completions
            .iter()
            .map(|c| c.completion)
            .collect();
        assert_eq!(completions, vec![Some(85), None, None]);

        // Only the concrete completion feeds the average.
        assert!((stats.homework_average.unwrap() - 85.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn delete_lesson_guards_attachments() {
        let db = setup_test_db().await;
        let (academy, class, _students) = class_with_students(&db, 0).await;

        let lesson = create_lesson(&db, academy.id, class.id, date(2026, 3, 2))
            .await
            .unwrap();
        let test = Test::create(&db, academy.id, class.id, "Quiz").await.unwrap();
        attach_test(&db, lesson.id, test.id).await.unwrap();

        let err = delete_lesson(&db, lesson.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidState(_)));

        detach_test(&db, lesson.id).await.unwrap();
        delete_lesson(&db, lesson.id).await.unwrap();
    }

    #[tokio::test]
    async fn attach_rejects_foreign_class_test() {
        let db = setup_test_db().await;
        let (academy, class, _students) = class_with_students(&db, 0).await;
        let other_class = Class::create(&db, academy.id, "Other", None, None)
            .await
            .unwrap();

        let lesson = create_lesson(&db, academy.id, class.id, date(2026, 3, 2))
            .await
            .unwrap();
        let test = Test::create(&db, academy.id, other_class.id, "Quiz")
            .await
            .unwrap();

        let err = attach_test(&db, lesson.id, test.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidState(_)));
    }

    #[tokio::test]
    async fn duplicate_lesson_date_rejected() {
        let db = setup_test_db().await;
        let (academy, class, _students) = class_with_students(&db, 0).await;

        create_lesson(&db, academy.id, class.id, date(2026, 3, 2))
            .await
            .unwrap();
        let err = create_lesson(&db, academy.id, class.id, date(2026, 3, 2))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidState(_)));

        // get_or_create returns the existing one instead.
        let lesson = get_or_create_lesson(&db, academy.id, class.id, date(2026, 3, 2))
            .await
            .unwrap();
        assert_eq!(lesson.lesson_date, date(2026, 3, 2));
    }

    #[tokio::test]
    async fn assignment_locked_once_graded() {
        let db = setup_test_db().await;
        let (academy, class, students) = class_with_students(&db, 1).await;
        let student = &students[0];

        let lesson = create_lesson(&db, academy.id, class.id, date(2026, 3, 2))
            .await
            .unwrap();
        let first = Homework::create(&db, academy.id, class.id, "Set A", 10, None, None)
            .await
            .unwrap();
        let second = Homework::create(&db, academy.id, class.id, "Set B", 10, None, None)
            .await
            .unwrap();
        attach_homework(&db, lesson.id, first.id).await.unwrap();
        attach_homework(&db, lesson.id, second.id).await.unwrap();

        let assign_first = [HomeworkAssignment {
            student_id: student.id,
            homework_id: first.id,
        }];
        assign_homeworks(&db, lesson.id, &assign_first).await.unwrap();

        // Same homework again: no-op, row survives.
        assign_homeworks(&db, lesson.id, &assign_first).await.unwrap();
        let views = get_assignments(&db, lesson.id).await.unwrap();
        assert_eq!(views[0].assigned_homework_id, Some(first.id));

        // Ungraded: switching to the other homework replaces the row.
        let assign_second = [HomeworkAssignment {
            student_id: student.id,
            homework_id: second.id,
        }];
        assign_homeworks(&db, lesson.id, &assign_second).await.unwrap();
        let views = get_assignments(&db, lesson.id).await.unwrap();
        assert_eq!(views[0].assigned_homework_id, Some(second.id));

        // Graded: switching back is rejected.
        let row = StudentHomework::find_by_student_and_homework(&db, student.id, second.id)
            .await
            .unwrap()
            .unwrap();
        StudentHomework::set_counts(&db, row.id, Some(2), Some(1))
            .await
            .unwrap();

        let err = assign_homeworks(&db, lesson.id, &assign_first)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidState(_)));
    }

    #[tokio::test]
    async fn assignment_requires_lesson_homework() {
        let db = setup_test_db().await;
        let (academy, class, students) = class_with_students(&db, 1).await;

        let lesson = create_lesson(&db, academy.id, class.id, date(2026, 3, 2))
            .await
            .unwrap();
        let loose = Homework::create(&db, academy.id, class.id, "Loose", 10, None, None)
            .await
            .unwrap();

        let err = assign_homeworks(
            &db,
            lesson.id,
            &[HomeworkAssignment {
                student_id: students[0].id,
                homework_id: loose.id,
            }],
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidState(_)));
    }
}
