use campus_core::model::assignment::UpdateAssignmentRequest;
use one_dto_mapper::convert_inner;
use shared_types::AssignmentId;

use super::dto::UpdateAssignmentRequestRestDTO;

pub(super) fn update_assignment_request(
    id: AssignmentId,
    request: UpdateAssignmentRequestRestDTO,
) -> UpdateAssignmentRequest {
    UpdateAssignmentRequest {
        id,
        title: request.title,
        description: request.description,
        due_date: request.due_date,
        status: convert_inner(request.status),
    }
}
