use crate::seed::Seeder;
use async_trait::async_trait;
use chrono::Utc;
use db::models::academy_class::Entity as ClassEntity;
use db::models::student::Model as Student;
use sea_orm::{DatabaseConnection, EntityTrait};
use services::{ServiceError, clinic};

pub struct ClinicSeeder;

#[async_trait]
impl Seeder for ClinicSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), ServiceError> {
        let today = Utc::now().date_naive();

        let Some(class) = ClassEntity::find().one(db).await? else {
            return Ok(());
        };

        let created = clinic::create_clinic_for_this_week(db, class.id, today).await?;

        let students = Student::find_by_class(db, class.id).await?;
        for student in students.iter().take(2) {
            clinic::register(db, created.id, student.id, today).await?;
        }

        // One cancellation to exercise the reactivation path in demos.
        if let Some(student) = students.get(1) {
            clinic::cancel_registration(db, created.id, student.id).await?;
        }

        Ok(())
    }
}
