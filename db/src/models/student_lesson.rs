use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryFilter;
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Per-student instructor note for a lesson, distinct from the lesson's
/// shared `common_feedback`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "student_lessons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub student_id: i64,
    pub lesson_id: i64,

    pub instructor_feedback: Option<String>,
    pub feedback_author: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_delete = "Cascade"
    )]
    Student,

    #[sea_orm(
        belongs_to = "super::lesson::Entity",
        from = "Column::LessonId",
        to = "super::lesson::Column::Id",
        on_delete = "Cascade"
    )]
    Lesson,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lesson.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn find_by_student_and_lesson(
        db: &DbConn,
        student_id: i64,
        lesson_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::LessonId.eq(lesson_id))
            .one(db)
            .await
    }

    pub async fn upsert_feedback(
        db: &DbConn,
        student_id: i64,
        lesson_id: i64,
        feedback: &str,
        author: &str,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();

        match Self::find_by_student_and_lesson(db, student_id, lesson_id).await? {
            Some(existing) => {
                let mut active: ActiveModel = existing.into();
                active.instructor_feedback = Set(Some(feedback.to_owned()));
                active.feedback_author = Set(Some(author.to_owned()));
                active.updated_at = Set(now);
                active.update(db).await
            }
            None => {
                let row = ActiveModel {
                    student_id: Set(student_id),
                    lesson_id: Set(lesson_id),
                    instructor_feedback: Set(Some(feedback.to_owned())),
                    feedback_author: Set(Some(author.to_owned())),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                row.insert(db).await
            }
        }
    }
}
