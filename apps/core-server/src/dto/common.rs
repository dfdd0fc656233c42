use std::fmt;

use one_dto_mapper::Into;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GetListResponseRestDTO<T>
where
    T: fmt::Debug + Serialize,
{
    pub values: Vec<T>,
    pub total_pages: u64,
    pub total_items: u64,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListQueryParamsRest<Filter, SortColumn> {
    // pagination
    pub page: u32,
    pub page_size: PageSize<1000>,

    // sorting
    pub sort: Option<SortColumn>,
    pub sort_direction: Option<SortDirection>,

    // filtering
    #[serde(flatten)]
    pub filter: Filter,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, ToSchema, Into)]
#[into("campus_core::model::common::SortDirection")]
pub(crate) enum SortDirection {
    #[serde(rename = "ASC")]
    Ascending,
    #[serde(rename = "DESC")]
    Descending,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EntityResponseRestDTO {
    pub id: Uuid,
}

impl<T> From<T> for EntityResponseRestDTO
where
    T: Into<Uuid>,
{
    fn from(id: T) -> Self {
        EntityResponseRestDTO { id: id.into() }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct PageSize<const MAX: u32>(u32);

impl<const MAX: u32> PageSize<MAX> {
    pub fn inner(&self) -> u32 {
        self.0
    }
}

impl<'de, const MAX: u32> Deserialize<'de> for PageSize<MAX> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let size = u32::deserialize(deserializer)?;

        if size > MAX {
            return Err(serde::de::Error::custom(format!(
                "expected maximum pageSize of {MAX} got {size}"
            )));
        }

        Ok(PageSize(size))
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::ListQueryParamsRest;

    #[test]
    fn test_page_size_deserialization_is_limited_to_1000() {
        let query: ListQueryParamsRest<(), ()> = serde_json::from_value(json!({
            "page": 0,
            "pageSize": 1000
        }))
        .unwrap();

        assert_eq!(0, query.page);
        assert_eq!(1000, query.page_size.inner());

        let result: serde_json::Result<ListQueryParamsRest<(), ()>> =
            serde_json::from_value(json!({
                "page": 0,
                "pageSize": 1001
            }));

        assert_eq!(
            "expected maximum pageSize of 1000 got 1001",
            result.err().unwrap().to_string()
        )
    }
}
