use campus_core::model::student::UpdateStudentRequest;
use one_dto_mapper::convert_inner;
use shared_types::StudentId;

use super::dto::UpdateStudentRequestRestDTO;

pub(super) fn update_student_request(
    id: StudentId,
    request: UpdateStudentRequestRestDTO,
) -> UpdateStudentRequest {
    UpdateStudentRequest {
        id,
        branch_id: request.branch_id,
        group_id: request.group_id,
        first_name: request.first_name,
        last_name: request.last_name,
        phone: request.phone,
        address: request.address,
        parent_name: request.parent_name,
        parent_phone: request.parent_phone,
        parent_email: request.parent_email,
        status: convert_inner(request.status),
    }
}
