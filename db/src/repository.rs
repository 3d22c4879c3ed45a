use crate::filter_utils::{FilterUtils, QueryUtils, SortUtils};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, PrimaryKeyTrait, QueryFilter, Select,
};
use std::marker::PhantomData;
use std::str::FromStr;
use util::filters::{FilterParam, QueryParam};

/// Generic repository that works with any SeaORM entity.
///
/// Every method takes the connection explicitly, matching the model helper
/// methods, so callers can point it at an isolated test database.
pub struct Repository<E, C>
where
    E: EntityTrait,
    E::Model: Sync + Send + 'static,
    E::ActiveModel: ActiveModelTrait<Entity = E> + Send,
    E::Model: IntoActiveModel<E::ActiveModel>,
    C: ColumnTrait + FromStr + 'static,
    C::Err: std::fmt::Display,
{
    _phantom: PhantomData<(E, C)>,
}

impl<E, C> Repository<E, C>
where
    E: EntityTrait,
    E::Model: Sync + Send + 'static,
    E::ActiveModel: ActiveModelTrait<Entity = E> + Send,
    E::Model: IntoActiveModel<E::ActiveModel>,
    C: ColumnTrait + FromStr + 'static,
    C::Err: std::fmt::Display,
{
    fn resolve_column(column_name: &str) -> Result<C, DbErr> {
        C::from_str(column_name)
            .map_err(|e| DbErr::Custom(format!("Invalid column name '{}': {}", column_name, e)))
    }

    pub fn apply_filter(
        query: Select<E>,
        filter_params: &[FilterParam],
    ) -> Result<Select<E>, DbErr> {
        let condition = FilterUtils::apply_all_filters(filter_params, Self::resolve_column)?;
        Ok(query.filter(condition))
    }

    pub fn apply_query(query: Select<E>, query_params: &[QueryParam]) -> Result<Select<E>, DbErr> {
        let condition = QueryUtils::apply_all_queries(query_params, Self::resolve_column)?;
        Ok(query.filter(condition))
    }

    pub fn apply_sorting(query: Select<E>, sort_by: Option<String>) -> Select<E> {
        SortUtils::apply_sorting(query.clone(), sort_by, Self::resolve_column).unwrap_or(query)
    }

    pub async fn create(
        db: &DatabaseConnection,
        active_model: E::ActiveModel,
    ) -> Result<E::Model, DbErr> {
        active_model.insert(db).await
    }

    pub async fn update(
        db: &DatabaseConnection,
        active_model: E::ActiveModel,
    ) -> Result<E::Model, DbErr> {
        active_model.update(db).await
    }

    pub async fn delete_by_id(
        db: &DatabaseConnection,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> Result<(), DbErr> {
        E::delete_by_id(id).exec(db).await?;
        Ok(())
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(db).await
    }

    pub async fn find_one(
        db: &DatabaseConnection,
        filter_params: &[FilterParam],
        query_params: &[QueryParam],
        sort_by: Option<String>,
    ) -> Result<Option<E::Model>, DbErr> {
        let query = Self::apply_filter(E::find(), filter_params)?;
        let query = Self::apply_query(query, query_params)?;
        let query = Self::apply_sorting(query, sort_by);
        query.one(db).await
    }

    pub async fn find_all(
        db: &DatabaseConnection,
        filter_params: &[FilterParam],
        query_params: &[QueryParam],
        sort_by: Option<String>,
    ) -> Result<Vec<E::Model>, DbErr> {
        let query = Self::apply_filter(E::find(), filter_params)?;
        let query = Self::apply_query(query, query_params)?;
        let query = Self::apply_sorting(query, sort_by);
        query.all(db).await
    }

    /// Paginated listing; returns the page plus the unpaginated total.
    pub async fn filter(
        db: &DatabaseConnection,
        filter_params: &[FilterParam],
        query_params: &[QueryParam],
        page: u64,
        per_page: u64,
        sort_by: Option<String>,
    ) -> Result<(Vec<E::Model>, u64), DbErr> {
        let query = Self::apply_filter(E::find(), filter_params)?;
        let query = Self::apply_query(query, query_params)?;
        let query = Self::apply_sorting(query, sort_by);

        let paginator = query.paginate(db, per_page);
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((items, total))
    }

    pub async fn count(
        db: &DatabaseConnection,
        filter_params: &[FilterParam],
        query_params: &[QueryParam],
    ) -> Result<u64, DbErr> {
        let query = Self::apply_filter(E::find(), filter_params)?;
        let query = Self::apply_query(query, query_params)?;
        <Select<E> as PaginatorTrait<'_, _>>::count(query, db).await
    }

    pub async fn exists(
        db: &DatabaseConnection,
        filter_params: &[FilterParam],
        query_params: &[QueryParam],
    ) -> Result<bool, DbErr> {
        Ok(Self::count(db, filter_params, query_params).await? > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::Repository;
    use crate::models::academy::{Column, Entity, Model as Academy};
    use crate::test_utils::setup_test_db;
    use util::filters::{FilterParam, QueryParam};

    type AcademyRepo = Repository<Entity, Column>;

    #[tokio::test]
    async fn filter_paginates_and_counts() {
        let db = setup_test_db().await;

        for name in ["Gangnam Math", "Daechi Math", "Mokdong Science"] {
            Academy::create(&db, name).await.unwrap();
        }

        let (page, total) = AcademyRepo::filter(&db, &[], &[], 1, 2, Some("name".into()))
            .await
            .unwrap();
        assert_eq!(total, 3);
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].name, "Daechi Math");
    }

    #[tokio::test]
    async fn query_param_searches_across_columns() {
        let db = setup_test_db().await;

        Academy::create(&db, "Gangnam Math").await.unwrap();
        Academy::create(&db, "Daechi Math").await.unwrap();

        let found = AcademyRepo::find_all(
            &db,
            &[],
            &[QueryParam::new(vec!["name".into()], "Daechi".into())],
            None,
        )
        .await
        .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Daechi Math");
    }

    #[tokio::test]
    async fn invalid_column_is_rejected() {
        let db = setup_test_db().await;

        let result =
            AcademyRepo::find_all(&db, &[FilterParam::eq("nope", 1i64)], &[], None).await;
        assert!(result.is_err());
    }
}
