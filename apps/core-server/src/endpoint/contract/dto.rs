use campus_core::model::contract::Contract;
use campus_core::service::enrollment::dto::CreateContractRequest;
use one_dto_mapper::{From, Into};
use serde::{Deserialize, Serialize};
use shared_types::{ContractId, GroupId, ProfileId, StudentId};
use time::{Date, OffsetDateTime};
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::{GetListResponseRestDTO, ListQueryParamsRest};

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(CreateContractRequest)]
pub(crate) struct CreateContractRequestRestDTO {
    pub student_id: StudentId,
    pub group_id: GroupId,
    pub contract_number: String,
    pub contract_file_path: String,
    pub signed_date: Date,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(Contract)]
pub(crate) struct ContractResponseRestDTO {
    pub id: ContractId,
    pub created_date: OffsetDateTime,
    pub student_id: StudentId,
    pub group_id: GroupId,
    pub contract_number: String,
    pub contract_file_path: String,
    pub signed_date: Date,
    pub is_verified: bool,
    pub verified_by_id: Option<ProfileId>,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::contract::SortableContractColumn")]
pub(crate) enum SortableContractColumnRestDTO {
    SignedDate,
    CreatedDate,
}

#[derive(Clone, Debug, Deserialize, IntoParams, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::contract::ContractFilter")]
pub(crate) struct ContractFilterQueryParamsRest {
    #[param(nullable = false)]
    pub student_id: Option<StudentId>,
    #[param(nullable = false)]
    pub group_id: Option<GroupId>,
    #[param(nullable = false)]
    pub is_verified: Option<bool>,
}

pub(crate) type GetContractsQuery =
    ListQueryParamsRest<ContractFilterQueryParamsRest, SortableContractColumnRestDTO>;

pub(crate) type GetContractListResponseRestDTO = GetListResponseRestDTO<ContractResponseRestDTO>;
