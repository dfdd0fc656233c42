use campus_core::model::center::Center;
use campus_core::service::center::dto::{CenterStatisticsResponse, CreateCenterRequest};
use one_dto_mapper::{From, Into, convert_inner};
use serde::{Deserialize, Serialize};
use shared_types::{CenterId, UserId};
use time::{Date, OffsetDateTime};
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::{GetListResponseRestDTO, ListQueryParamsRest};

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(CreateCenterRequest)]
pub(crate) struct CreateCenterRequestRestDTO {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub description: String,
    pub license_number: String,
    pub opened_at: Date,
    #[serde(default)]
    pub website: String,
    pub director_id: Option<UserId>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(Center)]
pub(crate) struct CenterResponseRestDTO {
    pub id: CenterId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub description: String,
    pub license_number: String,
    pub opened_at: Date,
    pub status: CenterStatusRestEnum,
    pub website: String,
    pub logo_path: Option<String>,
    pub director_id: Option<UserId>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, ToSchema, From, Into)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from("campus_core::model::center::CenterStatus")]
#[into("campus_core::model::center::CenterStatus")]
pub(crate) enum CenterStatusRestEnum {
    Active,
    Inactive,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct UpdateCenterRequestRestDTO {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub status: Option<CenterStatusRestEnum>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub director_id: Option<Option<UserId>>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(CenterStatisticsResponse)]
pub(crate) struct CenterStatisticsResponseRestDTO {
    pub branches: u64,
    pub groups: u64,
    pub teachers: u64,
    pub students: u64,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::center::SortableCenterColumn")]
pub(crate) enum SortableCenterColumnRestDTO {
    Name,
    CreatedDate,
}

#[derive(Clone, Debug, Deserialize, IntoParams, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::center::CenterFilter")]
pub(crate) struct CenterFilterQueryParamsRest {
    /// Return all centers with a name starting with this string.
    #[param(nullable = false)]
    pub name: Option<String>,
    #[param(inline, nullable = false)]
    #[into(with_fn = convert_inner)]
    pub status: Option<CenterStatusRestEnum>,
}

pub(crate) type GetCentersQuery =
    ListQueryParamsRest<CenterFilterQueryParamsRest, SortableCenterColumnRestDTO>;

pub(crate) type GetCenterListResponseRestDTO = GetListResponseRestDTO<CenterResponseRestDTO>;
