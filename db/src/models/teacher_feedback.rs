use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryFilter;
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Free-text feedback on a graded submission. The author is recorded by
/// name rather than by foreign key.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "teacher_feedbacks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub submission_id: i64,
    pub teacher_name: String,
    pub content: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student_submission::Entity",
        from = "Column::SubmissionId",
        to = "super::student_submission::Column::Id",
        on_delete = "Cascade"
    )]
    Submission,
}

impl Related<super::student_submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        submission_id: i64,
        teacher_name: &str,
        content: &str,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let feedback = ActiveModel {
            submission_id: Set(submission_id),
            teacher_name: Set(teacher_name.to_owned()),
            content: Set(content.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        feedback.insert(db).await
    }

    pub async fn update_content(db: &DbConn, id: i64, content: &str) -> Result<Model, DbErr> {
        let feedback = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Feedback not found".to_string()))?;

        let mut active: ActiveModel = feedback.into();
        active.content = Set(content.to_owned());
        active.updated_at = Set(Utc::now());
        active.update(db).await
    }

    pub async fn find_by_submission(
        db: &DbConn,
        submission_id: i64,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::SubmissionId.eq(submission_id))
            .all(db)
            .await
    }

    pub async fn find_by_submission_ids(
        db: &DbConn,
        submission_ids: Vec<i64>,
    ) -> Result<Vec<Model>, DbErr> {
        if submission_ids.is_empty() {
            return Ok(Vec::new());
        }
        Entity::find()
            .filter(Column::SubmissionId.is_in(submission_ids))
            .all(db)
            .await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
