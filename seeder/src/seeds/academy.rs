use crate::seed::Seeder;
use async_trait::async_trait;
use chrono::NaiveTime;
use db::models::academy::Model as Academy;
use db::models::academy_class::{Model as Class, Weekday};
use sea_orm::DatabaseConnection;
use services::ServiceError;

pub struct AcademySeeder;

#[async_trait]
impl Seeder for AcademySeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), ServiceError> {
        let gangnam = Academy::create(db, "Gangnam Math Academy").await?;
        let daechi = Academy::create(db, "Daechi Math Academy").await?;

        let classes = [
            (gangnam.id, "Year 1 Basics", Weekday::Saturday, 10),
            (gangnam.id, "Year 1 Advanced", Weekday::Saturday, 14),
            (gangnam.id, "Year 2 Basics", Weekday::Saturday, 16),
            (daechi.id, "Year 2 Advanced", Weekday::Sunday, 10),
            (daechi.id, "Year 3 Regular", Weekday::Sunday, 14),
            (daechi.id, "Year 3 Intensive", Weekday::Sunday, 16),
        ];

        for (academy_id, name, weekday, hour) in classes {
            Class::create(
                db,
                academy_id,
                name,
                Some(weekday),
                NaiveTime::from_hms_opt(hour, 0, 0),
            )
            .await?;
        }

        Ok(())
    }
}
