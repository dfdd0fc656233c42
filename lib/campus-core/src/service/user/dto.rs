use shared_types::{CenterId, UserId};
use time::Date;

use crate::model::user::Role;

#[derive(Clone, Debug)]
pub struct CreateUserRequest {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    /// Required for tenant-bound roles; super admins carry no tenant.
    pub center_id: Option<CenterId>,
    pub phone: String,
    pub passport_number: Option<String>,
    pub birthday: Option<Date>,
}

/// The token is returned exactly once, at provisioning time.
#[derive(Clone, Debug)]
pub struct CreateUserResponse {
    pub id: UserId,
    pub api_token: String,
}
