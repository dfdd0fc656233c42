use campus_core::model::group::UpdateGroupRequest;
use one_dto_mapper::convert_inner;
use shared_types::GroupId;

use super::dto::UpdateGroupRequestRestDTO;

pub(super) fn update_group_request(
    id: GroupId,
    request: UpdateGroupRequestRestDTO,
) -> UpdateGroupRequest {
    UpdateGroupRequest {
        id,
        name: request.name,
        subject_id: request.subject_id,
        teacher_id: request.teacher_id,
        room_id: request.room_id,
        capacity: request.capacity,
        status: convert_inner(request.status),
        start_date: request.start_date,
        end_date: request.end_date,
    }
}
