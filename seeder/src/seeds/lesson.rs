use crate::seed::Seeder;
use async_trait::async_trait;
use chrono::{Days, Utc};
use db::models::academy_class::Entity as ClassEntity;
use db::models::test::Model as Test;
use sea_orm::{DatabaseConnection, EntityTrait};
use services::submission::QuestionAnswer;
use services::{ServiceError, homework, lesson, submission};

pub struct LessonSeeder;

#[async_trait]
impl Seeder for LessonSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), ServiceError> {
        let Some(class) = ClassEntity::find().one(db).await? else {
            return Ok(());
        };

        let today = Utc::now().date_naive();
        let yesterday = today.checked_sub_days(Days::new(1)).unwrap();

        // Yesterday's lesson carries a graded test and homework; today's
        // lesson provides the "next homework" view.
        let past = lesson::create_lesson(db, class.academy_id, class.id, yesterday).await?;
        let upcoming = lesson::create_lesson(db, class.academy_id, class.id, today).await?;

        let test = Test::create(db, class.academy_id, class.id, "Weekly quadratics quiz").await?;
        lesson::attach_test(db, past.id, test.id).await?;

        // Fifteen questions, answers cycling 1-5, equal-division points.
        let answers: Vec<QuestionAnswer> = (1..=15)
            .map(|number| QuestionAnswer {
                number,
                answer: Some(((number - 1) % 5 + 1).to_string()),
            })
            .collect();
        submission::save_test_answers(db, test.id, &answers).await?;

        let workbook = homework::create_homework(
            db,
            homework::CreateHomework {
                academy_id: class.academy_id,
                class_id: class.id,
                title: "Workbook p.12-20".into(),
                question_count: 20,
                memo: Some("Factoring drills".into()),
                due_date: Some(today),
            },
        )
        .await?;
        lesson::attach_homework(db, past.id, workbook.id).await?;

        let prep = homework::create_homework(
            db,
            homework::CreateHomework {
                academy_id: class.academy_id,
                class_id: class.id,
                title: "Prep sheet 3".into(),
                question_count: 10,
                memo: None,
                due_date: today.checked_add_days(Days::new(2)),
            },
        )
        .await?;
        lesson::attach_homework(db, upcoming.id, prep.id).await?;

        lesson::update_lesson_content(
            db,
            past.id,
            Some("Good focus overall; review sign errors in expansion.".into()),
            Some("Clinic runs this Saturday as usual.".into()),
        )
        .await?;

        Ok(())
    }
}
