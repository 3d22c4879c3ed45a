use crate::seed::Seeder;
use async_trait::async_trait;
use db::models::academy_class::Entity as ClassEntity;
use db::models::student::Model as Student;
use sea_orm::{DatabaseConnection, EntityTrait};
use services::ServiceError;

pub struct StudentSeeder;

const NAMES: [&str; 10] = [
    "Minjun Kim",
    "Seoyeon Lee",
    "Dohyun Park",
    "Sua Choi",
    "Hayun Jung",
    "Jihun Park",
    "Minseo Kang",
    "Eunwoo Cho",
    "Chaewon Yun",
    "Jiho Shin",
];

const SCHOOLS: [&str; 3] = ["Seoul High", "Gangnam High", "Daechi High"];

#[async_trait]
impl Seeder for StudentSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), ServiceError> {
        let classes = ClassEntity::find().all(db).await?;

        // Five students per class with deterministic pins.
        for (class_index, class) in classes.iter().enumerate() {
            let grade = format!("Year {}", class_index / 2 + 1);
            for i in 0..5 {
                let name = NAMES[(class_index * 5 + i) % NAMES.len()];
                let school = SCHOOLS[i % SCHOOLS.len()];
                let pin = format!("{}{}", class_index + 1, 110 + i);
                Student::create(db, class.id, name, &grade, school, &pin).await?;
            }
        }

        Ok(())
    }
}
