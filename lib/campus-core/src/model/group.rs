use shared_types::{BranchId, CenterId, GroupId, RoomId, SubjectId, TeacherId};
use strum::{Display, EnumString};
use time::{Date, OffsetDateTime};

use super::common::ListQuery;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, EnumString)]
pub enum GroupStatus {
    Active,
    Closed,
}

/// Study group. Carries its center id redundantly so tenant scoping does not
/// have to walk through the branch for the most queried resource.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Group {
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
    pub status: GroupStatus,
    pub start_date: Date,
    pub end_date: Date,
}

#[derive(Clone, Debug, Default)]
pub struct UpdateGroupRequest {
    pub id: GroupId,
    pub name: Option<String>,
    pub subject_id: Option<SubjectId>,
    pub teacher_id: Option<Option<TeacherId>>,
    pub room_id: Option<Option<RoomId>>,
    pub capacity: Option<u32>,
    pub status: Option<GroupStatus>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortableGroupColumn {
    Name,
    StartDate,
    CreatedDate,
}

#[derive(Clone, Debug, Default)]
pub struct GroupFilter {
    pub name: Option<String>,
    pub branch_id: Option<BranchId>,
    pub subject_id: Option<SubjectId>,
    pub teacher_id: Option<TeacherId>,
    pub status: Option<GroupStatus>,
}

pub type GroupListQuery = ListQuery<SortableGroupColumn, GroupFilter>;
