use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::DeriveActiveEnum;
use sea_orm::PaginatorTrait;
use sea_orm::QueryFilter;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Registration of a student for a clinic. The (clinic, student) pair is
/// unique at the schema level; cancelling and re-registering reuses the
/// same row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "clinic_registrations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub clinic_id: i64,
    pub student_id: i64,

    pub status: RegistrationStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "registration_status")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RegistrationStatus {
    #[sea_orm(string_value = "registered")]
    Registered,

    #[sea_orm(string_value = "cancelled")]
    Cancelled,

    #[sea_orm(string_value = "attended")]
    Attended,

    #[sea_orm(string_value = "absent")]
    Absent,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::clinic::Entity",
        from = "Column::ClinicId",
        to = "super::clinic::Column::Id",
        on_delete = "Cascade"
    )]
    Clinic,

    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_delete = "Cascade"
    )]
    Student,
}

impl Related<super::clinic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clinic.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(db: &DbConn, clinic_id: i64, student_id: i64) -> Result<Model, DbErr> {
        let now = Utc::now();
        let registration = ActiveModel {
            clinic_id: Set(clinic_id),
            student_id: Set(student_id),
            status: Set(RegistrationStatus::Registered),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        registration.insert(db).await
    }

    pub async fn find_by_clinic_and_student(
        db: &DbConn,
        clinic_id: i64,
        student_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::ClinicId.eq(clinic_id))
            .filter(Column::StudentId.eq(student_id))
            .one(db)
            .await
    }

    pub async fn find_by_clinic(db: &DbConn, clinic_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::ClinicId.eq(clinic_id))
            .all(db)
            .await
    }

    pub async fn count_by_clinic(db: &DbConn, clinic_id: i64) -> Result<u64, DbErr> {
        Entity::find()
            .filter(Column::ClinicId.eq(clinic_id))
            .count(db)
            .await
    }

    pub async fn set_status(
        db: &DbConn,
        id: i64,
        status: RegistrationStatus,
    ) -> Result<Model, DbErr> {
        let registration = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Registration not found".to_string()))?;

        let mut active: ActiveModel = registration.into();
        active.status = Set(status);
        active.updated_at = Set(Utc::now());
        active.update(db).await
    }
}
