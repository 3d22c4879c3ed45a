use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryFilter;
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub class_id: i64,
    pub name: String,
    pub grade: String,
    pub school: String,
    #[serde(skip_serializing)]
    pub pin: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::academy_class::Entity",
        from = "Column::ClassId",
        to = "super::academy_class::Column::Id",
        on_delete = "Cascade"
    )]
    Class,

    #[sea_orm(has_many = "super::student_submission::Entity")]
    Submissions,

    #[sea_orm(has_many = "super::student_homework::Entity")]
    Homeworks,
}

impl Related<super::academy_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::student_submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl Related<super::student_homework::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Homeworks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        class_id: i64,
        name: &str,
        grade: &str,
        school: &str,
        pin: &str,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let student = ActiveModel {
            class_id: Set(class_id),
            name: Set(name.to_owned()),
            grade: Set(grade.to_owned()),
            school: Set(school.to_owned()),
            pin: Set(pin.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        student.insert(db).await
    }

    pub async fn update(
        db: &DbConn,
        id: i64,
        class_id: i64,
        name: &str,
        grade: &str,
        school: &str,
    ) -> Result<Model, DbErr> {
        let student = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Student not found".to_string()))?;

        let mut active: ActiveModel = student.into();
        active.class_id = Set(class_id);
        active.name = Set(name.to_owned());
        active.grade = Set(grade.to_owned());
        active.school = Set(school.to_owned());
        active.updated_at = Set(Utc::now());
        active.update(db).await
    }

    /// Roster of a class.
    pub async fn find_by_class(db: &DbConn, class_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::ClassId.eq(class_id))
            .all(db)
            .await
    }

    pub async fn find_by_id_and_pin(
        db: &DbConn,
        id: i64,
        pin: &str,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Id.eq(id))
            .filter(Column::Pin.eq(pin))
            .one(db)
            .await
    }

    pub async fn change_pin(db: &DbConn, id: i64, new_pin: &str) -> Result<Model, DbErr> {
        let student = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Student not found".to_string()))?;

        let mut active: ActiveModel = student.into();
        active.pin = Set(new_pin.to_owned());
        active.updated_at = Set(Utc::now());
        active.update(db).await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
