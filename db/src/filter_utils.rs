//! Translation of the `util::filters` request machinery into SeaORM
//! conditions and orderings.

use sea_orm::sea_query::IntoCondition;
use sea_orm::{ColumnTrait, Condition, DbErr, EntityTrait, QueryOrder, Select};
use util::filters::{CompareOp, FilterParam, FilterValue, QueryParam};

pub struct FilterUtils;

impl FilterUtils {
    pub fn apply_all_filters<C, F>(
        filter_params: &[FilterParam],
        resolve_column: F,
    ) -> Result<Condition, DbErr>
    where
        C: ColumnTrait,
        F: Fn(&str) -> Result<C, DbErr>,
    {
        let mut condition = Condition::all();

        for param in filter_params {
            let column = resolve_column(&param.column)?;
            condition = condition.add(Self::build_condition(column, param)?);
        }

        Ok(condition)
    }

    fn build_condition<C: ColumnTrait>(
        column: C,
        param: &FilterParam,
    ) -> Result<Condition, DbErr> {
        if param.value.is_empty() {
            return Err(DbErr::Custom(format!(
                "Filter on column '{}' has no values",
                param.column
            )));
        }

        let condition = match (&param.operator, &param.value) {
            (CompareOp::Eq, FilterValue::String(v)) if v.len() > 1 => {
                column.is_in(v.clone()).into_condition()
            }
            (CompareOp::Eq, FilterValue::Int(v)) if v.len() > 1 => {
                column.is_in(v.clone()).into_condition()
            }
            (CompareOp::Eq, value) => Self::single(value, |v| column.eq(v))?,
            (CompareOp::Ne, value) => Self::single(value, |v| column.ne(v))?,
            (CompareOp::Gt, value) => Self::single(value, |v| column.gt(v))?,
            (CompareOp::Gte, value) => Self::single(value, |v| column.gte(v))?,
            (CompareOp::Lt, value) => Self::single(value, |v| column.lt(v))?,
            (CompareOp::Lte, value) => Self::single(value, |v| column.lte(v))?,
            (CompareOp::Like, FilterValue::String(v)) => {
                let mut any = Condition::any();
                for s in v {
                    any = any.add(column.contains(s.as_str()));
                }
                any
            }
            (CompareOp::Like, _) => {
                return Err(DbErr::Custom(format!(
                    "LIKE filter on column '{}' requires string values",
                    param.column
                )));
            }
        };

        Ok(condition)
    }

    fn single<F>(value: &FilterValue, apply: F) -> Result<Condition, DbErr>
    where
        F: FnOnce(sea_orm::Value) -> sea_orm::sea_query::SimpleExpr,
    {
        let expr = match value {
            FilterValue::String(v) => apply(v[0].clone().into()),
            FilterValue::Int(v) => apply(v[0].into()),
            FilterValue::Bool(v) => apply(v[0].into()),
            FilterValue::Date(v) => apply(v[0].into()),
        };
        Ok(expr.into_condition())
    }
}

pub struct QueryUtils;

impl QueryUtils {
    /// OR-combined free-text search over the named columns.
    pub fn apply_all_queries<C, F>(
        query_params: &[QueryParam],
        resolve_column: F,
    ) -> Result<Condition, DbErr>
    where
        C: ColumnTrait,
        F: Fn(&str) -> Result<C, DbErr>,
    {
        let mut condition = Condition::all();

        for param in query_params {
            let mut any = Condition::any();
            for column_name in &param.columns {
                let column = resolve_column(column_name)?;
                any = any.add(column.contains(param.query.as_str()));
            }
            condition = condition.add(any);
        }

        Ok(condition)
    }
}

pub struct SortUtils;

impl SortUtils {
    /// Applies a comma-separated sort expression; a leading `-` means
    /// descending (e.g. `-lesson_date,name`).
    pub fn apply_sorting<E, C, F>(
        mut query: Select<E>,
        sort_by: Option<String>,
        resolve_column: F,
    ) -> Result<Select<E>, DbErr>
    where
        E: EntityTrait,
        C: ColumnTrait,
        F: Fn(&str) -> Result<C, DbErr>,
    {
        let Some(sort_by) = sort_by else {
            return Ok(query);
        };

        for field in sort_by.split(',') {
            let field = field.trim();
            if field.is_empty() {
                continue;
            }

            let (name, ascending) = match field.strip_prefix('-') {
                Some(name) => (name, false),
                None => (field, true),
            };

            let column = resolve_column(name)?;
            query = if ascending {
                query.order_by_asc(column)
            } else {
                query.order_by_desc(column)
            };
        }

        Ok(query)
    }
}
