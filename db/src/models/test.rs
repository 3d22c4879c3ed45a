use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryFilter;
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "tests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub academy_id: i64,
    pub class_id: i64,
    /// At most one test per lesson, enforced at attach time.
    pub lesson_id: Option<i64>,
    pub title: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::academy::Entity",
        from = "Column::AcademyId",
        to = "super::academy::Column::Id",
        on_delete = "Cascade"
    )]
    Academy,

    #[sea_orm(
        belongs_to = "super::academy_class::Entity",
        from = "Column::ClassId",
        to = "super::academy_class::Column::Id",
        on_delete = "Cascade"
    )]
    Class,

    #[sea_orm(
        belongs_to = "super::lesson::Entity",
        from = "Column::LessonId",
        to = "super::lesson::Column::Id"
    )]
    Lesson,

    #[sea_orm(has_many = "super::test_question::Entity")]
    Questions,

    #[sea_orm(has_many = "super::student_submission::Entity")]
    Submissions,
}

impl Related<super::lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lesson.def()
    }
}

impl Related<super::test_question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Questions.def()
    }
}

impl Related<super::student_submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        academy_id: i64,
        class_id: i64,
        title: &str,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let test = ActiveModel {
            academy_id: Set(academy_id),
            class_id: Set(class_id),
            lesson_id: Set(None),
            title: Set(title.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        test.insert(db).await
    }

    pub async fn rename(db: &DbConn, id: i64, title: &str) -> Result<Model, DbErr> {
        let test = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Test not found".to_string()))?;

        let mut active: ActiveModel = test.into();
        active.title = Set(title.to_owned());
        active.updated_at = Set(Utc::now());
        active.update(db).await
    }

    pub async fn find_by_lesson(db: &DbConn, lesson_id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::LessonId.eq(lesson_id))
            .one(db)
            .await
    }

    pub async fn set_lesson(db: &DbConn, id: i64, lesson_id: Option<i64>) -> Result<Model, DbErr> {
        let test = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Test not found".to_string()))?;

        let mut active: ActiveModel = test.into();
        active.lesson_id = Set(lesson_id);
        active.updated_at = Set(Utc::now());
        active.update(db).await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
