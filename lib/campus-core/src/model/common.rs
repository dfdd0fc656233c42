#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// One page of a scoped list query.
#[derive(Clone, Debug)]
pub struct GetListResponse<T> {
    pub values: Vec<T>,
    pub total_pages: u64,
    pub total_items: u64,
}

#[derive(Clone, Copy, Debug)]
pub struct ListPagination {
    pub page: u32,
    pub page_size: u32,
}

#[derive(Clone, Debug)]
pub struct ListSorting<SortableColumn> {
    pub column: SortableColumn,
    pub direction: Option<SortDirection>,
}

#[derive(Clone, Debug)]
pub struct ListQuery<SortableColumn, Filter> {
    pub pagination: Option<ListPagination>,
    pub sorting: Option<ListSorting<SortableColumn>>,
    pub filtering: Option<Filter>,
}

// manual impl, `Filter` and `SortableColumn` do not need to be Default themselves
impl<SortableColumn, Filter> Default for ListQuery<SortableColumn, Filter> {
    fn default() -> Self {
        Self {
            pagination: None,
            sorting: None,
            filtering: None,
        }
    }
}
