use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryFilter;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "lessons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub academy_id: i64,
    pub class_id: i64,
    pub lesson_date: NaiveDate,

    /// Feedback shared with the whole class, as opposed to the per-student
    /// note in `student_lessons`.
    pub common_feedback: Option<String>,
    pub announcement: Option<String>,

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

    #[sea_orm(has_many = "super::homework::Entity")]
    Homeworks,

    #[sea_orm(has_many = "super::student_lesson::Entity")]
    StudentLessons,
}

impl Related<super::academy_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::homework::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Homeworks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        academy_id: i64,
        class_id: i64,
        lesson_date: NaiveDate,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let lesson = ActiveModel {
            academy_id: Set(academy_id),
            class_id: Set(class_id),
            lesson_date: Set(lesson_date),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        lesson.insert(db).await
    }

    pub async fn find_by_class_and_date(
        db: &DbConn,
        academy_id: i64,
        class_id: i64,
        lesson_date: NaiveDate,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::AcademyId.eq(academy_id))
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::LessonDate.eq(lesson_date))
            .one(db)
            .await
    }

    /// Lessons of a class, most recent first.
    pub async fn find_by_class(db: &DbConn, class_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_desc(Column::LessonDate)
            .all(db)
            .await
    }

    /// Lessons of a class strictly after `date`, soonest first.
    pub async fn find_next_after(
        db: &DbConn,
        class_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::LessonDate.gt(date))
            .order_by_asc(Column::LessonDate)
            .all(db)
            .await
    }

    pub async fn update_content(
        db: &DbConn,
        id: i64,
        common_feedback: Option<String>,
        announcement: Option<String>,
    ) -> Result<Model, DbErr> {
        let lesson = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Lesson not found".to_string()))?;

        let mut active: ActiveModel = lesson.into();
        active.common_feedback = Set(common_feedback);
        active.announcement = Set(announcement);
        active.updated_at = Set(Utc::now());
        active.update(db).await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
