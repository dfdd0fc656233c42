use campus_core::model::lead::UpdateLeadRequest;
use one_dto_mapper::convert_inner;
use shared_types::LeadId;

use super::dto::UpdateLeadRequestRestDTO;

pub(super) fn update_lead_request(id: LeadId, request: UpdateLeadRequestRestDTO) -> UpdateLeadRequest {
    UpdateLeadRequest {
        id,
        name: request.name,
        email: request.email,
        phone: request.phone,
        course_interested_id: request.course_interested_id,
        status: convert_inner(request.status),
        assigned_to_id: request.assigned_to_id,
        notes: request.notes,
    }
}
