use campus_core::model::branch::Branch;
use campus_core::service::branch::dto::CreateBranchRequest;
use one_dto_mapper::{From, Into, convert_inner};
use serde::{Deserialize, Serialize};
use shared_types::{BranchId, CenterId, ProfileId};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::{GetListResponseRestDTO, ListQueryParamsRest};

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(CreateBranchRequest)]
pub(crate) struct CreateBranchRequestRestDTO {
    /// Required for super admins; center staff default to their own tenant.
    pub center_id: Option<CenterId>,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub manager_id: Option<ProfileId>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(Branch)]
pub(crate) struct BranchResponseRestDTO {
    pub id: BranchId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub center_id: CenterId,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub manager_id: Option<ProfileId>,
    pub status: BranchStatusRestEnum,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, ToSchema, From, Into)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from("campus_core::model::branch::BranchStatus")]
#[into("campus_core::model::branch::BranchStatus")]
pub(crate) enum BranchStatusRestEnum {
    Open,
    Closed,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct UpdateBranchRequestRestDTO {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub manager_id: Option<Option<ProfileId>>,
    pub status: Option<BranchStatusRestEnum>,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::branch::SortableBranchColumn")]
pub(crate) enum SortableBranchColumnRestDTO {
    Name,
    CreatedDate,
}

#[derive(Clone, Debug, Deserialize, IntoParams, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::branch::BranchFilter")]
pub(crate) struct BranchFilterQueryParamsRest {
    /// Return all branches with a name starting with this string.
    #[param(nullable = false)]
    pub name: Option<String>,
    #[param(inline, nullable = false)]
    #[into(with_fn = convert_inner)]
    pub status: Option<BranchStatusRestEnum>,
}

pub(crate) type GetBranchesQuery =
    ListQueryParamsRest<BranchFilterQueryParamsRest, SortableBranchColumnRestDTO>;

pub(crate) type GetBranchListResponseRestDTO = GetListResponseRestDTO<BranchResponseRestDTO>;
