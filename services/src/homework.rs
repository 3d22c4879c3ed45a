//! Homework CRUD and per-student progress tracking.

use chrono::NaiveDate;
use sea_orm::{DbConn, EntityTrait};
use serde::{Deserialize, Serialize};

use db::models::{
    academy::Entity as AcademyEntity,
    academy_class::Entity as ClassEntity,
    homework::{Entity as HomeworkEntity, Model as Homework},
    student::Entity as StudentEntity,
    student_homework::Model as StudentHomework,
};

use crate::error::{ServiceError, ServiceResult};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateHomework {
    pub academy_id: i64,
    pub class_id: i64,
    pub title: String,
    pub question_count: i32,
    pub memo: Option<String>,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateHomework {
    pub title: Option<String>,
    pub question_count: Option<i32>,
    pub memo: Option<String>,
    pub due_date: Option<NaiveDate>,
}

/// A student's homework row joined with the homework it grades, plus the
/// derived completion percentage.
#[derive(Debug, Clone, Serialize)]
pub struct StudentHomeworkView {
    pub id: i64,
    pub student_id: i64,
    pub homework_id: i64,
    pub homework_title: String,
    pub question_count: i32,
    pub incorrect_count: Option<i32>,
    pub unsolved_count: Option<i32>,
    pub completion: Option<i32>,
}

impl StudentHomeworkView {
    pub fn build(row: &StudentHomework, homework: &Homework) -> Self {
        Self {
            id: row.id,
            student_id: row.student_id,
            homework_id: homework.id,
            homework_title: homework.title.clone(),
            question_count: homework.question_count,
            incorrect_count: row.incorrect_count,
            unsolved_count: row.unsolved_count,
            completion: row.completion(homework.question_count),
        }
    }
}

pub async fn create_homework(db: &DbConn, params: CreateHomework) -> ServiceResult<Homework> {
    AcademyEntity::find_by_id(params.academy_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("academy", params.academy_id))?;
    ClassEntity::find_by_id(params.class_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("class", params.class_id))?;

    Ok(Homework::create(
        db,
        params.academy_id,
        params.class_id,
        &params.title,
        params.question_count,
        params.memo.as_deref(),
        params.due_date,
    )
    .await?)
}

pub async fn update_homework(
    db: &DbConn,
    homework_id: i64,
    params: UpdateHomework,
) -> ServiceResult<Homework> {
    use sea_orm::ActiveValue::Set;
    use sea_orm::ActiveModelTrait;

    let homework = require_homework(db, homework_id).await?;

    let mut active: db::models::homework::ActiveModel = homework.into();
    if let Some(title) = params.title {
        active.title = Set(title);
    }
    if let Some(question_count) = params.question_count {
        active.question_count = Set(question_count);
    }
    active.memo = Set(params.memo);
    active.due_date = Set(params.due_date);
    active.updated_at = Set(chrono::Utc::now());

    Ok(active.update(db).await?)
}

pub async fn get_homework(db: &DbConn, homework_id: i64) -> ServiceResult<Homework> {
    require_homework(db, homework_id).await
}

pub async fn delete_homework(db: &DbConn, homework_id: i64) -> ServiceResult<()> {
    require_homework(db, homework_id).await?;
    Homework::delete(db, homework_id).await?;
    Ok(())
}

/// Homeworks of a class not yet attached to any lesson, i.e. the pool the
/// lesson workflow picks from.
pub async fn unattached_homeworks(
    db: &DbConn,
    academy_id: i64,
    class_id: i64,
) -> ServiceResult<Vec<Homework>> {
    Ok(Homework::find_unattached(db, academy_id, class_id).await?)
}

/// Records grading counts for a student's homework, creating the
/// assignment row if the homework was never explicitly assigned.
pub async fn update_progress(
    db: &DbConn,
    student_id: i64,
    homework_id: i64,
    incorrect_count: Option<i32>,
    unsolved_count: Option<i32>,
) -> ServiceResult<StudentHomeworkView> {
    StudentEntity::find_by_id(student_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("student", student_id))?;
    let homework = require_homework(db, homework_id).await?;

    let row = match StudentHomework::find_by_student_and_homework(db, student_id, homework_id)
        .await?
    {
        Some(existing) => existing,
        None => StudentHomework::assign(db, student_id, homework_id).await?,
    };

    let row = StudentHomework::set_counts(db, row.id, incorrect_count, unsolved_count).await?;
    Ok(StudentHomeworkView::build(&row, &homework))
}

pub async fn homeworks_by_student(
    db: &DbConn,
    student_id: i64,
) -> ServiceResult<Vec<StudentHomeworkView>> {
    StudentEntity::find_by_id(student_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("student", student_id))?;

    let mut views = Vec::new();
    for row in StudentHomework::find_by_student(db, student_id).await? {
        let Some(homework) = HomeworkEntity::find_by_id(row.homework_id).one(db).await? else {
            continue;
        };
        views.push(StudentHomeworkView::build(&row, &homework));
    }

    Ok(views)
}

pub async fn students_of_homework(
    db: &DbConn,
    homework_id: i64,
) -> ServiceResult<Vec<StudentHomeworkView>> {
    let homework = require_homework(db, homework_id).await?;

    let views = StudentHomework::find_by_homework(db, homework_id)
        .await?
        .iter()
        .map(|row| StudentHomeworkView::build(row, &homework))
        .collect();

    Ok(views)
}

pub async fn remove_assignment(
    db: &DbConn,
    student_id: i64,
    homework_id: i64,
) -> ServiceResult<()> {
    if let Some(row) =
        StudentHomework::find_by_student_and_homework(db, student_id, homework_id).await?
    {
        StudentHomework::delete(db, row.id).await?;
    }
    Ok(())
}

async fn require_homework(db: &DbConn, homework_id: i64) -> ServiceResult<Homework> {
    HomeworkEntity::find_by_id(homework_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("homework", homework_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use db::models::{academy::Model as Academy, academy_class::Model as Class, student::Model as Student};
    use db::test_utils::setup_test_db;

    async fn fixture(db: &DbConn) -> (Academy, Class, Student) {
        let academy = Academy::create(db, "Gangnam Math").await.unwrap();
        let class = Class::create(db, academy.id, "Year 1 Basics", None, None)
            .await
            .unwrap();
        let student = Student::create(db, class.id, "Minjun Kim", "10", "Seoul High", "1111")
            .await
            .unwrap();
        (academy, class, student)
    }

    #[tokio::test]
    async fn progress_upserts_and_derives_completion() {
        let db = setup_test_db().await;
        let (academy, class, student) = fixture(&db).await;

        let homework = create_homework(
            &db,
            CreateHomework {
                academy_id: academy.id,
                class_id: class.id,
                title: "Workbook p.12-20".into(),
                question_count: 20,
                memo: None,
                due_date: None,
            },
        )
        .await
        .unwrap();

        let view = update_progress(&db, student.id, homework.id, Some(3), Some(0))
            .await
            .unwrap();
        assert_eq!(view.completion, Some(85));

        // Grading again reuses the same assignment row.
        let again = update_progress(&db, student.id, homework.id, Some(0), Some(0))
            .await
            .unwrap();
        assert_eq!(again.id, view.id);
        assert_eq!(again.completion, Some(100));
    }

    #[tokio::test]
    async fn ungraded_assignment_has_null_completion() {
        let db = setup_test_db().await;
        let (academy, class, student) = fixture(&db).await;

        let homework = create_homework(
            &db,
            CreateHomework {
                academy_id: academy.id,
                class_id: class.id,
                title: "Workbook p.21-30".into(),
                question_count: 10,
                memo: None,
                due_date: None,
            },
        )
        .await
        .unwrap();

        StudentHomework::assign(&db, student.id, homework.id)
            .await
            .unwrap();

        let views = homeworks_by_student(&db, student.id).await.unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].completion, None);
    }

    #[tokio::test]
    async fn unattached_pool_excludes_attached_homework() {
        let db = setup_test_db().await;
        let (academy, class, _student) = fixture(&db).await;

        let loose = create_homework(
            &db,
            CreateHomework {
                academy_id: academy.id,
                class_id: class.id,
                title: "Loose".into(),
                question_count: 5,
                memo: None,
                due_date: None,
            },
        )
        .await
        .unwrap();

        let attached = create_homework(
            &db,
            CreateHomework {
                academy_id: academy.id,
                class_id: class.id,
                title: "Attached".into(),
                question_count: 5,
                memo: None,
                due_date: None,
            },
        )
        .await
        .unwrap();

        let lesson = db::models::lesson::Model::create(
            &db,
            academy.id,
            class.id,
            chrono::NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        )
        .await
        .unwrap();
        Homework::set_lesson(&db, attached.id, Some(lesson.id))
            .await
            .unwrap();

        let pool = unattached_homeworks(&db, academy.id, class.id).await.unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].id, loose.id);
    }
}
