use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::DeriveActiveEnum;
use sea_orm::QueryFilter;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "clinics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub class_id: i64,
    pub clinic_date: NaiveDate,
    pub clinic_time: NaiveTime,

    pub status: ClinicStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "clinic_status")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ClinicStatus {
    #[sea_orm(string_value = "open")]
    Open,

    #[sea_orm(string_value = "closed")]
    Closed,
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

    #[sea_orm(has_many = "super::clinic_registration::Entity")]
    Registrations,
}

impl Related<super::academy_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::clinic_registration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Registrations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        class_id: i64,
        clinic_date: NaiveDate,
        clinic_time: NaiveTime,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let clinic = ActiveModel {
            class_id: Set(class_id),
            clinic_date: Set(clinic_date),
            clinic_time: Set(clinic_time),
            status: Set(ClinicStatus::Open),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        clinic.insert(db).await
    }

    /// One clinic per class per day.
    pub async fn find_by_class_and_date(
        db: &DbConn,
        class_id: i64,
        clinic_date: NaiveDate,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::ClinicDate.eq(clinic_date))
            .one(db)
            .await
    }

    /// Clinics of a class, most recent first.
    pub async fn find_by_class(db: &DbConn, class_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_desc(Column::ClinicDate)
            .all(db)
            .await
    }

    /// Nearest clinic dated today or later.
    pub async fn find_upcoming(
        db: &DbConn,
        class_id: i64,
        today: NaiveDate,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::ClinicDate.gte(today))
            .order_by_asc(Column::ClinicDate)
            .one(db)
            .await
    }

    pub async fn set_status(db: &DbConn, id: i64, status: ClinicStatus) -> Result<Model, DbErr> {
        let clinic = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Clinic not found".to_string()))?;

        let mut active: ActiveModel = clinic.into();
        active.status = Set(status);
        active.updated_at = Set(Utc::now());
        active.update(db).await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
