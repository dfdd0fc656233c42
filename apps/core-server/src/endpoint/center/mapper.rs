use campus_core::model::center::UpdateCenterRequest;
use one_dto_mapper::convert_inner;
use shared_types::CenterId;

use super::dto::UpdateCenterRequestRestDTO;

pub(super) fn update_center_request(
    id: CenterId,
    request: UpdateCenterRequestRestDTO,
) -> UpdateCenterRequest {
    UpdateCenterRequest {
        id,
        name: request.name,
        address: request.address,
        phone: request.phone,
        email: request.email,
        description: request.description,
        website: request.website,
        status: convert_inner(request.status),
        director_id: request.director_id,
    }
}
