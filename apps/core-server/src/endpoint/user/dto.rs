use campus_core::model::user::User;
use campus_core::service::user::dto::{CreateUserRequest, CreateUserResponse};
use one_dto_mapper::{From, Into, convert_inner};
use serde::{Deserialize, Serialize};
use shared_types::{CenterId, UserId};
use time::{Date, OffsetDateTime};
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::{GetListResponseRestDTO, ListQueryParamsRest};

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(CreateUserRequest)]
pub(crate) struct CreateUserRequestRestDTO {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: RoleRestEnum,
    /// Required for tenant-bound roles; super admins carry no tenant.
    pub center_id: Option<CenterId>,
    pub phone: String,
    pub passport_number: Option<String>,
    pub birthday: Option<Date>,
}

/// The token is returned exactly once, at provisioning time.
#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(CreateUserResponse)]
pub(crate) struct CreateUserResponseRestDTO {
    pub id: UserId,
    pub api_token: String,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(User)]
pub(crate) struct UserResponseRestDTO {
    pub id: UserId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, ToSchema, From, Into)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from("campus_core::model::user::Role")]
#[into("campus_core::model::user::Role")]
pub(crate) enum RoleRestEnum {
    SuperAdmin,
    Director,
    Manager,
    Admin,
    Teacher,
    Student,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct UpdateUserRequestRestDTO {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::user::SortableUserColumn")]
pub(crate) enum SortableUserColumnRestDTO {
    Username,
    CreatedDate,
}

#[derive(Clone, Debug, Deserialize, IntoParams, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::user::UserFilter")]
pub(crate) struct UserFilterQueryParamsRest {
    #[param(nullable = false)]
    pub username: Option<String>,
    #[param(inline, nullable = false)]
    #[into(with_fn = convert_inner)]
    pub role: Option<RoleRestEnum>,
}

pub(crate) type GetUsersQuery =
    ListQueryParamsRest<UserFilterQueryParamsRest, SortableUserColumnRestDTO>;

pub(crate) type GetUserListResponseRestDTO = GetListResponseRestDTO<UserResponseRestDTO>;
