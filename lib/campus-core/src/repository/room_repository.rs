use shared_types::RoomId;

use super::error::DataLayerError;
use crate::model::branch::{Room, RoomListQuery, UpdateRoomRequest};
use crate::model::common::GetListResponse;
use crate::model::scope::VisibilityScope;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait RoomRepository: Send + Sync {
    async fn create_room(&self, request: Room) -> Result<RoomId, DataLayerError>;

    async fn get_room(
        &self,
        id: &RoomId,
        scope: &VisibilityScope,
    ) -> Result<Option<Room>, DataLayerError>;

    async fn get_room_list(
        &self,
        query: RoomListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Room>, DataLayerError>;

    async fn update_room(&self, request: UpdateRoomRequest) -> Result<(), DataLayerError>;

    async fn delete_room(&self, id: &RoomId) -> Result<(), DataLayerError>;
}
