use campus_core::model::branch::UpdateBranchRequest;
use one_dto_mapper::convert_inner;
use shared_types::BranchId;

use super::dto::UpdateBranchRequestRestDTO;

pub(super) fn update_branch_request(
    id: BranchId,
    request: UpdateBranchRequestRestDTO,
) -> UpdateBranchRequest {
    UpdateBranchRequest {
        id,
        name: request.name,
        address: request.address,
        phone: request.phone,
        manager_id: request.manager_id,
        status: convert_inner(request.status),
    }
}
