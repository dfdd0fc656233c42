use campus_core::model::center::Subject;
use campus_core::service::center::dto::CreateSubjectRequest;
use one_dto_mapper::{From, Into};
use serde::{Deserialize, Serialize};
use shared_types::{CenterId, SubjectId};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::{GetListResponseRestDTO, ListQueryParamsRest};

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(CreateSubjectRequest)]
pub(crate) struct CreateSubjectRequestRestDTO {
    /// Required for super admins; center staff default to their own tenant.
    pub center_id: Option<CenterId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(Subject)]
pub(crate) struct SubjectResponseRestDTO {
    pub id: SubjectId,
    pub created_date: OffsetDateTime,
    pub center_id: CenterId,
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::center::SortableSubjectColumn")]
pub(crate) enum SortableSubjectColumnRestDTO {
    Name,
    CreatedDate,
}

#[derive(Clone, Debug, Deserialize, IntoParams, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::center::SubjectFilter")]
pub(crate) struct SubjectFilterQueryParamsRest {
    /// Return all subjects with a name starting with this string.
    #[param(nullable = false)]
    pub name: Option<String>,
}

pub(crate) type GetSubjectsQuery =
    ListQueryParamsRest<SubjectFilterQueryParamsRest, SortableSubjectColumnRestDTO>;

pub(crate) type GetSubjectListResponseRestDTO = GetListResponseRestDTO<SubjectResponseRestDTO>;
