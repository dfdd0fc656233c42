use shared_types::{CenterId, UserId};
use time::Date;

#[derive(Clone, Debug)]
pub struct CreateCenterRequest {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub description: String,
    pub license_number: String,
    pub opened_at: Date,
    pub website: String,
    pub director_id: Option<UserId>,
}

#[derive(Clone, Debug)]
pub struct CreateSubjectRequest {
    /// Required for super admins; center staff default to their own tenant.
    pub center_id: Option<CenterId>,
    pub name: String,
    pub description: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CenterStatisticsResponse {
    pub branches: u64,
    pub groups: u64,
    pub teachers: u64,
    pub students: u64,
}
