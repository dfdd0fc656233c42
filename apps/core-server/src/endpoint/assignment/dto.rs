use campus_core::model::assignment::Assignment;
use campus_core::service::coursework::dto::CreateAssignmentRequest;
use one_dto_mapper::{From, Into, convert_inner};
use serde::{Deserialize, Serialize};
use shared_types::{AssignmentId, GroupId, TeacherId};
use time::{Date, OffsetDateTime};
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::{GetListResponseRestDTO, ListQueryParamsRest};

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(CreateAssignmentRequest)]
pub(crate) struct CreateAssignmentRequestRestDTO {
    pub group_id: GroupId,
    /// Defaults to the acting teacher when omitted.
    pub teacher_id: Option<TeacherId>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub file_path: Option<String>,
    pub due_date: Date,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(Assignment)]
pub(crate) struct AssignmentResponseRestDTO {
    pub id: AssignmentId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub group_id: GroupId,
    pub teacher_id: TeacherId,
    pub title: String,
    pub description: String,
    pub file_path: Option<String>,
    pub due_date: Date,
    pub status: AssignmentStatusRestEnum,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, ToSchema, From, Into)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from("campus_core::model::assignment::AssignmentStatus")]
#[into("campus_core::model::assignment::AssignmentStatus")]
pub(crate) enum AssignmentStatusRestEnum {
    Assigned,
    Submitted,
    Graded,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct UpdateAssignmentRequestRestDTO {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<Date>,
    pub status: Option<AssignmentStatusRestEnum>,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::assignment::SortableAssignmentColumn")]
pub(crate) enum SortableAssignmentColumnRestDTO {
    DueDate,
    CreatedDate,
}

#[derive(Clone, Debug, Deserialize, IntoParams, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::assignment::AssignmentFilter")]
pub(crate) struct AssignmentFilterQueryParamsRest {
    #[param(nullable = false)]
    pub group_id: Option<GroupId>,
    #[param(nullable = false)]
    pub teacher_id: Option<TeacherId>,
    #[param(inline, nullable = false)]
    #[into(with_fn = convert_inner)]
    pub status: Option<AssignmentStatusRestEnum>,
}

pub(crate) type GetAssignmentsQuery =
    ListQueryParamsRest<AssignmentFilterQueryParamsRest, SortableAssignmentColumnRestDTO>;

pub(crate) type GetAssignmentListResponseRestDTO =
    GetListResponseRestDTO<AssignmentResponseRestDTO>;
