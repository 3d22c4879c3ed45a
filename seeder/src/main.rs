use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    academy::AcademySeeder, clinic::ClinicSeeder, lesson::LessonSeeder, student::StudentSeeder,
    submission::SubmissionSeeder, teacher::TeacherSeeder,
};

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let db = db::connect().await;

    for (seeder, name) in [
        (Box::new(TeacherSeeder) as Box<dyn Seeder + Send + Sync>, "Teacher"),
        (Box::new(AcademySeeder), "Academy"),
        (Box::new(StudentSeeder), "Student"),
        (Box::new(LessonSeeder), "Lesson"),
        (Box::new(SubmissionSeeder), "Submission"),
        (Box::new(ClinicSeeder), "Clinic"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
