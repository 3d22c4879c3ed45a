use sea_orm::ActiveValue::Set;
use sea_orm::QueryFilter;
use sea_orm::QueryOrder;
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "test_questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub test_id: i64,
    pub number: i32,
    /// Answer key; a question with no stored answer is never counted correct.
    pub answer: Option<String>,
    pub points: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::test::Entity",
        from = "Column::TestId",
        to = "super::test::Column::Id",
        on_delete = "Cascade"
    )]
    Test,

    #[sea_orm(has_many = "super::student_submission_detail::Entity")]
    SubmissionDetails,
}

impl Related<super::test::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Test.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Splits 100 points evenly over `count` questions, one decimal place each,
/// with the last question absorbing the rounding remainder so the sum is
/// exactly 100.
pub fn equal_division_points(count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }

    let per_question = (100.0 / count as f64 * 10.0).round() / 10.0;
    let mut points = vec![per_question; count];
    let assigned: f64 = per_question * (count - 1) as f64;
    points[count - 1] = ((100.0 - assigned) * 10.0).round() / 10.0;
    points
}

impl Model {
    pub async fn create(
        db: &DbConn,
        test_id: i64,
        number: i32,
        answer: Option<&str>,
        points: f64,
    ) -> Result<Model, DbErr> {
        let question = ActiveModel {
            test_id: Set(test_id),
            number: Set(number),
            answer: Set(answer.map(|a| a.to_owned())),
            points: Set(points),
            ..Default::default()
        };

        question.insert(db).await
    }

    /// Questions of a test in presentation order.
    pub async fn find_by_test(db: &DbConn, test_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::TestId.eq(test_id))
            .order_by_asc(Column::Number)
            .all(db)
            .await
    }

    pub async fn delete_by_test(db: &DbConn, test_id: i64) -> Result<u64, DbErr> {
        let res = Entity::delete_many()
            .filter(Column::TestId.eq(test_id))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::equal_division_points;

    #[test]
    fn points_sum_to_exactly_one_hundred() {
        for count in 1..=40 {
            let points = equal_division_points(count);
            assert_eq!(points.len(), count);
            let sum: f64 = points.iter().sum();
            assert!(
                (sum - 100.0).abs() < 1e-9,
                "count {count}: sum was {sum}"
            );
        }
    }

    #[test]
    fn last_question_absorbs_remainder() {
        // 100 / 15 rounds to 6.7 per question; 14 * 6.7 = 93.8 leaves 6.2.
        let points = equal_division_points(15);
        assert_eq!(points[0], 6.7);
        assert_eq!(points[14], 6.2);
    }

    #[test]
    fn empty_test_has_no_points() {
        assert!(equal_division_points(0).is_empty());
    }
}
