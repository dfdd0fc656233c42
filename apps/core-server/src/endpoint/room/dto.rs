use campus_core::model::branch::Room;
use campus_core::service::branch::dto::CreateRoomRequest;
use one_dto_mapper::{From, Into};
use serde::{Deserialize, Serialize};
use shared_types::{BranchId, RoomId};
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::{GetListResponseRestDTO, ListQueryParamsRest};

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(CreateRoomRequest)]
pub(crate) struct CreateRoomRequestRestDTO {
    pub branch_id: BranchId,
    pub name: String,
    pub capacity: u32,
    #[serde(default)]
    pub equipment: String,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(Room)]
pub(crate) struct RoomResponseRestDTO {
    pub id: RoomId,
    pub branch_id: BranchId,
    pub name: String,
    pub capacity: u32,
    pub equipment: String,
    pub is_available: bool,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct UpdateRoomRequestRestDTO {
    pub name: Option<String>,
    pub capacity: Option<u32>,
    pub equipment: Option<String>,
    pub is_available: Option<bool>,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::branch::SortableRoomColumn")]
pub(crate) enum SortableRoomColumnRestDTO {
    Name,
    Capacity,
}

#[derive(Clone, Debug, Deserialize, IntoParams, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::branch::RoomFilter")]
pub(crate) struct RoomFilterQueryParamsRest {
    #[param(nullable = false)]
    pub branch_id: Option<BranchId>,
    #[param(nullable = false)]
    pub is_available: Option<bool>,
}

pub(crate) type GetRoomsQuery =
    ListQueryParamsRest<RoomFilterQueryParamsRest, SortableRoomColumnRestDTO>;

pub(crate) type GetRoomListResponseRestDTO = GetListResponseRestDTO<RoomResponseRestDTO>;
