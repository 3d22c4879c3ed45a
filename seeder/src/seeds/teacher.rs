use crate::seed::Seeder;
use async_trait::async_trait;
use db::models::teacher::Model as Teacher;
use sea_orm::DatabaseConnection;
use services::ServiceError;

pub struct TeacherSeeder;

#[async_trait]
impl Seeder for TeacherSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), ServiceError> {
        Teacher::create(db, "Suhui", "suhui", "123456").await?;
        Teacher::create(db, "Minho", "minho", "123456").await?;
        Ok(())
    }
}
