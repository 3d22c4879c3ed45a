use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryFilter;
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "student_submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub student_id: i64,
    pub test_id: i64,

    pub total_score: i32,
    pub submitted_at: DateTime<Utc>,
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
        belongs_to = "super::test::Entity",
        from = "Column::TestId",
        to = "super::test::Column::Id",
        on_delete = "Cascade"
    )]
    Test,

    #[sea_orm(has_many = "super::student_submission_detail::Entity")]
    Details,

    #[sea_orm(has_many = "super::teacher_feedback::Entity")]
    Feedbacks,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::test::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Test.def()
    }
}

impl Related<super::student_submission_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Details.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// One submission per (student, test); re-grading goes through update.
    pub async fn find_by_student_and_test(
        db: &DbConn,
        student_id: i64,
        test_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::TestId.eq(test_id))
            .one(db)
            .await
    }

    pub async fn find_by_student(db: &DbConn, student_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .all(db)
            .await
    }

    pub async fn find_by_test(db: &DbConn, test_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::TestId.eq(test_id))
            .all(db)
            .await
    }

    pub async fn upsert_score(
        db: &DbConn,
        student_id: i64,
        test_id: i64,
        total_score: i32,
        submitted_at: DateTime<Utc>,
    ) -> Result<Model, DbErr> {
        match Self::find_by_student_and_test(db, student_id, test_id).await? {
            Some(existing) => {
                let mut active: ActiveModel = existing.into();
                active.total_score = Set(total_score);
                active.submitted_at = Set(submitted_at);
                active.update(db).await
            }
            None => {
                let submission = ActiveModel {
                    student_id: Set(student_id),
                    test_id: Set(test_id),
                    total_score: Set(total_score),
                    submitted_at: Set(submitted_at),
                    ..Default::default()
                };
                submission.insert(db).await
            }
        }
    }

    pub async fn set_score(db: &DbConn, id: i64, total_score: i32) -> Result<Model, DbErr> {
        let submission = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Submission not found".to_string()))?;

        let mut active: ActiveModel = submission.into();
        active.total_score = Set(total_score);
        active.update(db).await
    }
}
