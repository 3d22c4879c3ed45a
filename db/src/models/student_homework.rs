use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::QueryFilter;
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "student_homeworks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub student_id: i64,
    pub homework_id: i64,

    /// None until the teacher grades the hand-in.
    pub incorrect_count: Option<i32>,
    pub unsolved_count: Option<i32>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Grading state of a homework hand-in, derived from the nullable count
/// columns at the model boundary so downstream code never branches on
/// raw options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradingState {
    /// Assigned but nothing graded yet. Distinct from a graded hand-in
    /// with zero correct answers.
    Ungraded,
    Graded { incorrect: i32, unsolved: i32 },
}

impl GradingState {
    /// Completion percentage over `question_count` questions.
    ///
    /// None while ungraded; 0 when the homework has no questions. The
    /// numerator is clamped so over-counted incorrect answers can never
    /// push the result below zero.
    pub fn completion(self, question_count: i32) -> Option<i32> {
        match self {
            GradingState::Ungraded => None,
            GradingState::Graded { incorrect, unsolved } => {
                if question_count <= 0 {
                    return Some(0);
                }
                let correct = (question_count - incorrect - unsolved).max(0);
                Some((correct as f64 / question_count as f64 * 100.0).round() as i32)
            }
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_delete = "Cascade"
    )]
    Student,

    #[sea_orm(
        belongs_to = "super::homework::Entity",
        from = "Column::HomeworkId",
        to = "super::homework::Column::Id",
        on_delete = "Cascade"
    )]
    Homework,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::homework::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Homework.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn grading_state(&self) -> GradingState {
        match self.incorrect_count {
            None => GradingState::Ungraded,
            Some(incorrect) => GradingState::Graded {
                incorrect,
                unsolved: self.unsolved_count.unwrap_or(0),
            },
        }
    }

    /// Derived at read time; the counts mutate independently, so the
    /// percentage is never stored.
    pub fn completion(&self, question_count: i32) -> Option<i32> {
        self.grading_state().completion(question_count)
    }

    pub async fn assign(db: &DbConn, student_id: i64, homework_id: i64) -> Result<Model, DbErr> {
        let now = Utc::now();
        let row = ActiveModel {
            student_id: Set(student_id),
            homework_id: Set(homework_id),
            incorrect_count: Set(None),
            unsolved_count: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        row.insert(db).await
    }

    pub async fn find_by_student_and_homework(
        db: &DbConn,
        student_id: i64,
        homework_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::HomeworkId.eq(homework_id))
            .one(db)
            .await
    }

    pub async fn find_by_student(db: &DbConn, student_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .all(db)
            .await
    }

    pub async fn find_by_homework(db: &DbConn, homework_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::HomeworkId.eq(homework_id))
            .all(db)
            .await
    }

    pub async fn find_by_homework_ids(
        db: &DbConn,
        homework_ids: Vec<i64>,
    ) -> Result<Vec<Model>, DbErr> {
        if homework_ids.is_empty() {
            return Ok(Vec::new());
        }
        Entity::find()
            .filter(Column::HomeworkId.is_in(homework_ids))
            .all(db)
            .await
    }

    pub async fn set_counts(
        db: &DbConn,
        id: i64,
        incorrect_count: Option<i32>,
        unsolved_count: Option<i32>,
    ) -> Result<Model, DbErr> {
        let row = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Student homework not found".to_string()))?;

        let mut active: ActiveModel = row.into();
        active.incorrect_count = Set(incorrect_count);
        active.unsolved_count = Set(unsolved_count);
        active.updated_at = Set(Utc::now());
        active.update(db).await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::GradingState;

    #[test]
    fn ungraded_has_no_completion() {
        assert_eq!(GradingState::Ungraded.completion(20), None);
    }

    #[test]
    fn graded_completion_rounds() {
        let state = GradingState::Graded {
            incorrect: 3,
            unsolved: 0,
        };
        assert_eq!(state.completion(20), Some(85));
    }

    #[test]
    fn completion_clamps_at_zero() {
        let state = GradingState::Graded {
            incorrect: 25,
            unsolved: 0,
        };
        assert_eq!(state.completion(20), Some(0));
    }

    #[test]
    fn unsolved_questions_count_against_completion() {
        let state = GradingState::Graded {
            incorrect: 2,
            unsolved: 3,
        };
        assert_eq!(state.completion(20), Some(75));
    }

    #[test]
    fn zero_question_homework_is_zero_percent() {
        let state = GradingState::Graded {
            incorrect: 0,
            unsolved: 0,
        };
        assert_eq!(state.completion(0), Some(0));
    }
}
