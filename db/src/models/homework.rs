use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryFilter;
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "homeworks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub academy_id: i64,
    pub class_id: i64,
    /// Set when the homework is attached to a lesson; a lesson owns
    /// zero or more homeworks.
    pub lesson_id: Option<i64>,

    pub title: String,
    pub question_count: i32,
    pub memo: Option<String>,
    pub due_date: Option<NaiveDate>,

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

    #[sea_orm(has_many = "super::student_homework::Entity")]
    StudentHomeworks,
}

impl Related<super::lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lesson.def()
    }
}

impl Related<super::student_homework::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentHomeworks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        academy_id: i64,
        class_id: i64,
        title: &str,
        question_count: i32,
        memo: Option<&str>,
        due_date: Option<NaiveDate>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let homework = ActiveModel {
            academy_id: Set(academy_id),
            class_id: Set(class_id),
            lesson_id: Set(None),
            title: Set(title.to_owned()),
            question_count: Set(question_count),
            memo: Set(memo.map(|m| m.to_owned())),
            due_date: Set(due_date),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        homework.insert(db).await
    }

    pub async fn find_by_lesson(db: &DbConn, lesson_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::LessonId.eq(lesson_id))
            .all(db)
            .await
    }

    /// Homeworks of a class not yet attached to any lesson.
    pub async fn find_unattached(
        db: &DbConn,
        academy_id: i64,
        class_id: i64,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::AcademyId.eq(academy_id))
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::LessonId.is_null())
            .all(db)
            .await
    }

    pub async fn set_lesson(db: &DbConn, id: i64, lesson_id: Option<i64>) -> Result<Model, DbErr> {
        let homework = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Homework not found".to_string()))?;

        let mut active: ActiveModel = homework.into();
        active.lesson_id = Set(lesson_id);
        active.updated_at = Set(Utc::now());
        active.update(db).await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
