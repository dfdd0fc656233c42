use shared_types::{CenterId, ProfileId, UserId};
use strum::{Display, EnumString};
use time::{Date, OffsetDateTime};

use super::common::ListQuery;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, EnumString)]
pub enum Role {
    SuperAdmin,
    Director,
    Manager,
    Admin,
    Teacher,
    Student,
}

/// Login principal. The `api_token` is the opaque bearer token the REST
/// middleware resolves; it is provisioned together with the account.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct User {
    pub id: UserId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub api_token: String,
}

/// Role and tenant attachment of a [`User`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserProfile {
    pub id: ProfileId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub user_id: UserId,
    pub role: Role,
    pub center_id: Option<CenterId>,
    pub phone: String,
    pub passport_number: Option<String>,
    pub birthday: Option<Date>,
    pub is_blocked: bool,
}

#[derive(Clone, Debug, Default)]
pub struct UpdateUserRequest {
    pub id: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortableUserColumn {
    Username,
    CreatedDate,
}

#[derive(Clone, Debug, Default)]
pub struct UserFilter {
    pub username: Option<String>,
    pub role: Option<Role>,
}

pub type UserListQuery = ListQuery<SortableUserColumn, UserFilter>;
