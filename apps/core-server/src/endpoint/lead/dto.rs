use campus_core::model::lead::{Lead, LeadSourceCount};
use campus_core::service::enrollment::dto::{
    ConvertLeadResponse, CreateLeadRequest, LeadStatisticsResponse,
};
use one_dto_mapper::{From, Into, convert_inner};
use serde::{Deserialize, Serialize};
use shared_types::{BranchId, LeadId, ProfileId, StudentId, SubjectId};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::{GetListResponseRestDTO, ListQueryParamsRest};

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(CreateLeadRequest)]
pub(crate) struct CreateLeadRequestRestDTO {
    pub branch_id: BranchId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course_interested_id: Option<SubjectId>,
    pub source: LeadSourceRestEnum,
    pub assigned_to_id: Option<ProfileId>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(Lead)]
pub(crate) struct LeadResponseRestDTO {
    pub id: LeadId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub branch_id: BranchId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course_interested_id: Option<SubjectId>,
    pub status: LeadStatusRestEnum,
    pub source: LeadSourceRestEnum,
    pub assigned_to_id: Option<ProfileId>,
    pub notes: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, ToSchema, From, Into)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from("campus_core::model::lead::LeadStatus")]
#[into("campus_core::model::lead::LeadStatus")]
pub(crate) enum LeadStatusRestEnum {
    New,
    Contacted,
    Qualified,
    Converted,
    Rejected,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, ToSchema, From, Into)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from("campus_core::model::lead::LeadSource")]
#[into("campus_core::model::lead::LeadSource")]
pub(crate) enum LeadSourceRestEnum {
    SocialMedia,
    Website,
    Referral,
    DirectCall,
    Advertisement,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct UpdateLeadRequestRestDTO {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub course_interested_id: Option<Option<SubjectId>>,
    pub status: Option<LeadStatusRestEnum>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub assigned_to_id: Option<Option<ProfileId>>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(ConvertLeadResponse)]
pub(crate) struct ConvertLeadResponseRestDTO {
    pub student_id: StudentId,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(LeadSourceCount)]
pub(crate) struct LeadSourceCountRestDTO {
    pub source: LeadSourceRestEnum,
    pub count: u64,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(LeadStatisticsResponse)]
pub(crate) struct LeadStatisticsResponseRestDTO {
    #[from(with_fn = convert_inner)]
    pub sources: Vec<LeadSourceCountRestDTO>,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::lead::SortableLeadColumn")]
pub(crate) enum SortableLeadColumnRestDTO {
    Name,
    CreatedDate,
}

#[derive(Clone, Debug, Deserialize, IntoParams, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::lead::LeadFilter")]
pub(crate) struct LeadFilterQueryParamsRest {
    #[param(nullable = false)]
    pub branch_id: Option<BranchId>,
    #[param(inline, nullable = false)]
    #[into(with_fn = convert_inner)]
    pub status: Option<LeadStatusRestEnum>,
    #[param(inline, nullable = false)]
    #[into(with_fn = convert_inner)]
    pub source: Option<LeadSourceRestEnum>,
}

pub(crate) type GetLeadsQuery =
    ListQueryParamsRest<LeadFilterQueryParamsRest, SortableLeadColumnRestDTO>;

pub(crate) type GetLeadListResponseRestDTO = GetListResponseRestDTO<LeadResponseRestDTO>;
