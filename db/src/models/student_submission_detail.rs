use sea_orm::ActiveValue::Set;
use sea_orm::QueryFilter;
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "student_submission_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub submission_id: i64,
    pub question_id: i64,

    /// Answer as submitted; None when the student left the question blank.
    pub student_answer: Option<String>,
    pub is_correct: bool,
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

    #[sea_orm(
        belongs_to = "super::test_question::Entity",
        from = "Column::QuestionId",
        to = "super::test_question::Column::Id",
        on_delete = "Cascade"
    )]
    Question,
}

impl Related<super::student_submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submission.def()
    }
}

impl Related<super::test_question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn find_by_submission(
        db: &DbConn,
        submission_id: i64,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::SubmissionId.eq(submission_id))
            .all(db)
            .await
    }

    /// Re-submission replaces the whole detail set, never merges into it.
    pub async fn replace_for_submission(
        db: &DbConn,
        submission_id: i64,
        rows: Vec<(i64, Option<String>, bool)>,
    ) -> Result<(), DbErr> {
        Entity::delete_many()
            .filter(Column::SubmissionId.eq(submission_id))
            .exec(db)
            .await?;

        if rows.is_empty() {
            return Ok(());
        }

        let details = rows
            .into_iter()
            .map(|(question_id, student_answer, is_correct)| ActiveModel {
                submission_id: Set(submission_id),
                question_id: Set(question_id),
                student_answer: Set(student_answer),
                is_correct: Set(is_correct),
                ..Default::default()
            });

        Entity::insert_many(details).exec(db).await?;
        Ok(())
    }
}
