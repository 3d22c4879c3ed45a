use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryFilter;
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub name: String,
    #[sea_orm(unique)]
    pub username: String,
    #[serde(skip_serializing)]
    pub pin: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(db: &DbConn, name: &str, username: &str, pin: &str) -> Result<Model, DbErr> {
        let now = Utc::now();

        let teacher = ActiveModel {
            name: Set(name.to_owned()),
            username: Set(username.to_owned()),
            pin: Set(pin.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        teacher.insert(db).await
    }

    pub async fn find_by_username_and_pin(
        db: &DbConn,
        username: &str,
        pin: &str,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Username.eq(username))
            .filter(Column::Pin.eq(pin))
            .one(db)
            .await
    }

    pub async fn change_pin(db: &DbConn, id: i64, new_pin: &str) -> Result<Model, DbErr> {
        let teacher = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Teacher not found".to_string()))?;

        let mut active: ActiveModel = teacher.into();
        active.pin = Set(new_pin.to_owned());
        active.updated_at = Set(Utc::now());
        active.update(db).await
    }
}
