use campus_core::model::user::UpdateUserRequest;
use shared_types::UserId;

use super::dto::UpdateUserRequestRestDTO;

pub(super) fn update_user_request(id: UserId, request: UpdateUserRequestRestDTO) -> UpdateUserRequest {
    UpdateUserRequest {
        id,
        first_name: request.first_name,
        last_name: request.last_name,
        email: request.email,
    }
}
