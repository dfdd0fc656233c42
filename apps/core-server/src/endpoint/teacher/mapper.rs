use campus_core::model::teacher::UpdateTeacherRequest;
use one_dto_mapper::convert_inner;
use shared_types::TeacherId;

use super::dto::UpdateTeacherRequestRestDTO;

pub(super) fn update_teacher_request(
    id: TeacherId,
    request: UpdateTeacherRequestRestDTO,
) -> UpdateTeacherRequest {
    UpdateTeacherRequest {
        id,
        branch_id: request.branch_id,
        status: convert_inner(request.status),
        phone: request.phone,
        specialization: request.specialization,
        qualification: request.qualification,
        performance_rating: request.performance_rating,
        hourly_rate: request.hourly_rate,
        address: request.address,
    }
}
