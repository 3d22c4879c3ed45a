use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202606010001_create_teachers::Migration),
            Box::new(migrations::m202606010002_create_academies::Migration),
            Box::new(migrations::m202606010003_create_students::Migration),
            Box::new(migrations::m202606010004_create_lessons::Migration),
            Box::new(migrations::m202606010005_create_tests::Migration),
            Box::new(migrations::m202606010006_create_submissions::Migration),
            Box::new(migrations::m202606010007_create_homeworks::Migration),
            Box::new(migrations::m202606010008_create_student_lessons::Migration),
            Box::new(migrations::m202606010009_create_clinics::Migration),
            Box::new(migrations::m202606010010_create_teacher_feedbacks::Migration),
        ]
    }
}
