use campus_core::model::branch::UpdateRoomRequest;
use shared_types::RoomId;

use super::dto::UpdateRoomRequestRestDTO;

pub(super) fn update_room_request(id: RoomId, request: UpdateRoomRequestRestDTO) -> UpdateRoomRequest {
    UpdateRoomRequest {
        id,
        name: request.name,
        capacity: request.capacity,
        equipment: request.equipment,
        is_available: request.is_available,
    }
}
