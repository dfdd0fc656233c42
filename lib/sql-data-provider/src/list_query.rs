use campus_core::model::common::{ListPagination, ListQuery, SortDirection};
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select};

use crate::mapper::order_from_sort_direction;

pub(crate) trait IntoSortingColumn {
    /// converts a declared sorting column into a sea-orm column
    fn get_column(&self) -> SimpleExpr;
}

pub(crate) trait IntoFilterCondition {
    /// converts the query filter into a sea-orm condition
    fn get_condition(&self) -> Condition;
}

pub(crate) trait SelectWithListQuery<SortableColumn, Filter>
where
    SortableColumn: IntoSortingColumn,
    Filter: IntoFilterCondition,
{
    /// applies the query's filter; kept separate from pagination so the
    /// caller can count the filtered set first
    fn with_filtering(self, query: &ListQuery<SortableColumn, Filter>) -> Self;

    fn with_sorting_and_pagination(self, query: &ListQuery<SortableColumn, Filter>) -> Self;
}

impl<T, SortableColumn, Filter> SelectWithListQuery<SortableColumn, Filter> for Select<T>
where
    T: EntityTrait,
    SortableColumn: IntoSortingColumn,
    Filter: IntoFilterCondition,
{
    fn with_filtering(self, query: &ListQuery<SortableColumn, Filter>) -> Select<T> {
        match &query.filtering {
            Some(filter) => self.filter(filter.get_condition()),
            None => self,
        }
    }

    fn with_sorting_and_pagination(self, query: &ListQuery<SortableColumn, Filter>) -> Select<T> {
        let mut result = self;

        if let Some(sorting) = &query.sorting {
            result = result.order_by(
                sorting.column.get_column(),
                order_from_sort_direction(sorting.direction.unwrap_or(SortDirection::Ascending)),
            );
        }

        if let Some(pagination) = &query.pagination {
            let limit = pagination.page_size as u64;
            let offset = (pagination.page as u64) * limit;
            result = result.offset(offset).limit(limit);
        }

        result
    }
}

pub(crate) fn total_pages(total_items: u64, pagination: Option<&ListPagination>) -> u64 {
    match pagination {
        Some(pagination) if pagination.page_size > 0 => {
            total_items.div_ceil(pagination.page_size as u64)
        }
        _ => u64::from(total_items > 0),
    }
}

#[cfg(test)]
mod test {
    use campus_core::model::common::ListPagination;

    use super::total_pages;

    #[test]
    fn test_total_pages_rounds_up() {
        let pagination = ListPagination {
            page: 0,
            page_size: 10,
        };
        assert_eq!(total_pages(0, Some(&pagination)), 0);
        assert_eq!(total_pages(10, Some(&pagination)), 1);
        assert_eq!(total_pages(11, Some(&pagination)), 2);
    }

    #[test]
    fn test_total_pages_without_pagination_is_a_single_page() {
        assert_eq!(total_pages(0, None), 0);
        assert_eq!(total_pages(25, None), 1);
    }
}
