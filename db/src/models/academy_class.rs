use chrono::{DateTime, NaiveTime, Utc, Weekday as ChronoWeekday};
use sea_orm::ActiveValue::Set;
use sea_orm::DeriveActiveEnum;
use sea_orm::QueryFilter;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "academy_classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub academy_id: i64,
    pub name: String,

    /// Default weekly clinic slot; both fields must be set before
    /// "create this week's clinic" can resolve a date.
    pub clinic_weekday: Option<Weekday>,
    pub clinic_time: Option<NaiveTime>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "weekday")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Weekday {
    #[sea_orm(string_value = "monday")]
    Monday,
    #[sea_orm(string_value = "tuesday")]
    Tuesday,
    #[sea_orm(string_value = "wednesday")]
    Wednesday,
    #[sea_orm(string_value = "thursday")]
    Thursday,
    #[sea_orm(string_value = "friday")]
    Friday,
    #[sea_orm(string_value = "saturday")]
    Saturday,
    #[sea_orm(string_value = "sunday")]
    Sunday,
}

impl From<Weekday> for ChronoWeekday {
    fn from(value: Weekday) -> Self {
        match value {
            Weekday::Monday => ChronoWeekday::Mon,
            Weekday::Tuesday => ChronoWeekday::Tue,
            Weekday::Wednesday => ChronoWeekday::Wed,
            Weekday::Thursday => ChronoWeekday::Thu,
            Weekday::Friday => ChronoWeekday::Fri,
            Weekday::Saturday => ChronoWeekday::Sat,
            Weekday::Sunday => ChronoWeekday::Sun,
        }
    }
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

    #[sea_orm(has_many = "super::student::Entity")]
    Students,

    #[sea_orm(has_many = "super::clinic::Entity")]
    Clinics,
}

impl Related<super::academy::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Academy.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl Related<super::clinic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clinics.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        academy_id: i64,
        name: &str,
        clinic_weekday: Option<Weekday>,
        clinic_time: Option<NaiveTime>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let class = ActiveModel {
            academy_id: Set(academy_id),
            name: Set(name.to_owned()),
            clinic_weekday: Set(clinic_weekday),
            clinic_time: Set(clinic_time),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        class.insert(db).await
    }

    pub async fn update(
        db: &DbConn,
        id: i64,
        name: &str,
        clinic_weekday: Option<Weekday>,
        clinic_time: Option<NaiveTime>,
    ) -> Result<Model, DbErr> {
        let class = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Class not found".to_string()))?;

        let mut active: ActiveModel = class.into();
        if !name.is_empty() {
            active.name = Set(name.to_owned());
        }
        active.clinic_weekday = Set(clinic_weekday);
        active.clinic_time = Set(clinic_time);
        active.updated_at = Set(Utc::now());
        active.update(db).await
    }

    pub async fn find_by_academy(db: &DbConn, academy_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::AcademyId.eq(academy_id))
            .all(db)
            .await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
