use shared_types::{BranchId, CenterId, ProfileId, RoomId};
use strum::{Display, EnumString};
use time::OffsetDateTime;

use super::common::ListQuery;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, EnumString)]
pub enum BranchStatus {
    Open,
    Closed,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Branch {
    pub id: BranchId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub center_id: CenterId,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub manager_id: Option<ProfileId>,
    pub status: BranchStatus,
}

#[derive(Clone, Debug, Default)]
pub struct UpdateBranchRequest {
    pub id: BranchId,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub manager_id: Option<Option<ProfileId>>,
    pub status: Option<BranchStatus>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortableBranchColumn {
    Name,
    CreatedDate,
}

#[derive(Clone, Debug, Default)]
pub struct BranchFilter {
    pub name: Option<String>,
    pub status: Option<BranchStatus>,
}

pub type BranchListQuery = ListQuery<SortableBranchColumn, BranchFilter>;

/// Classroom; names are unique within one branch.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Room {
    pub id: RoomId,
    pub branch_id: BranchId,
    pub name: String,
    pub capacity: u32,
    pub equipment: String,
    pub is_available: bool,
}

#[derive(Clone, Debug, Default)]
pub struct UpdateRoomRequest {
    pub id: RoomId,
    pub name: Option<String>,
    pub capacity: Option<u32>,
    pub equipment: Option<String>,
    pub is_available: Option<bool>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortableRoomColumn {
    Name,
    Capacity,
}

#[derive(Clone, Debug, Default)]
pub struct RoomFilter {
    pub branch_id: Option<BranchId>,
    pub is_available: Option<bool>,
}

pub type RoomListQuery = ListQuery<SortableRoomColumn, RoomFilter>;
