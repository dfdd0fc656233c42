use campus_core::model::group::Group;
use campus_core::service::schedule::dto::{
    CreateGroupRequest, GroupAttendanceReportResponse, GroupStatisticsResponse,
};
use one_dto_mapper::{From, Into, convert_inner};
use serde::{Deserialize, Serialize};
use shared_types::{BranchId, CenterId, GroupId, RoomId, SubjectId, TeacherId};
use time::{Date, OffsetDateTime};
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::{GetListResponseRestDTO, ListQueryParamsRest};

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(CreateGroupRequest)]
pub(crate) struct CreateGroupRequestRestDTO {
    pub branch_id: BranchId,
    pub subject_id: SubjectId,
    pub teacher_id: Option<TeacherId>,
    pub room_id: Option<RoomId>,
    pub name: String,
    pub capacity: u32,
    pub start_date: Date,
    pub end_date: Date,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(Group)]
pub(crate) struct GroupResponseRestDTO {
    pub id: GroupId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub center_id: CenterId,
    pub branch_id: BranchId,
    pub subject_id: SubjectId,
    pub teacher_id: Option<TeacherId>,
    pub room_id: Option<RoomId>,
    pub name: String,
    pub capacity: u32,
    pub status: GroupStatusRestEnum,
    pub start_date: Date,
    pub end_date: Date,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, ToSchema, From, Into)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from("campus_core::model::group::GroupStatus")]
#[into("campus_core::model::group::GroupStatus")]
pub(crate) enum GroupStatusRestEnum {
    Active,
    Closed,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct UpdateGroupRequestRestDTO {
    pub name: Option<String>,
    pub subject_id: Option<SubjectId>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub teacher_id: Option<Option<TeacherId>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub room_id: Option<Option<RoomId>>,
    pub capacity: Option<u32>,
    pub status: Option<GroupStatusRestEnum>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(GroupStatisticsResponse)]
pub(crate) struct GroupStatisticsResponseRestDTO {
    pub students: u64,
    pub lessons: u64,
    /// Share of present marks over all attendance rows, in percent.
    pub average_attendance: f64,
    /// Minor currency units.
    pub payments_total: i64,
    pub payments_count: u64,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(GroupAttendanceReportResponse)]
pub(crate) struct GroupAttendanceReportResponseRestDTO {
    pub total_lessons: u64,
    pub total_attendances: u64,
    pub present: u64,
    pub absent: u64,
    pub late: u64,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::group::SortableGroupColumn")]
pub(crate) enum SortableGroupColumnRestDTO {
    Name,
    StartDate,
    CreatedDate,
}

#[derive(Clone, Debug, Deserialize, IntoParams, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::group::GroupFilter")]
pub(crate) struct GroupFilterQueryParamsRest {
    /// Return all groups with a name starting with this string.
    #[param(nullable = false)]
    pub name: Option<String>,
    #[param(nullable = false)]
    pub branch_id: Option<BranchId>,
    #[param(nullable = false)]
    pub subject_id: Option<SubjectId>,
    #[param(nullable = false)]
    pub teacher_id: Option<TeacherId>,
    #[param(inline, nullable = false)]
    #[into(with_fn = convert_inner)]
    pub status: Option<GroupStatusRestEnum>,
}

pub(crate) type GetGroupsQuery =
    ListQueryParamsRest<GroupFilterQueryParamsRest, SortableGroupColumnRestDTO>;

pub(crate) type GetGroupListResponseRestDTO = GetListResponseRestDTO<GroupResponseRestDTO>;
