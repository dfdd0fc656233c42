use campus_core::model::user::{
    SortableUserColumn, UpdateUserRequest, User, UserFilter, UserProfile,
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::IntoSimpleExpr;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Condition, Set};
use time::OffsetDateTime;

use crate::entity::{user, user_profile};
use crate::list_query::{IntoFilterCondition, IntoSortingColumn};

impl From<User> for user::ActiveModel {
    fn from(value: User) -> Self {
        Self {
            id: Set(value.id),
            created_date: Set(value.created_date),
            last_modified: Set(value.last_modified),
            username: Set(value.username),
            first_name: Set(value.first_name),
            last_name: Set(value.last_name),
            email: Set(value.email),
            api_token: Set(value.api_token),
        }
    }
}

impl From<UpdateUserRequest> for user::ActiveModel {
    fn from(value: UpdateUserRequest) -> Self {
        Self {
            id: Set(value.id),
            last_modified: Set(OffsetDateTime::now_utc()),
            first_name: value.first_name.map(Set).unwrap_or(NotSet),
            last_name: value.last_name.map(Set).unwrap_or(NotSet),
            email: value.email.map(Set).unwrap_or(NotSet),
            ..Default::default()
        }
    }
}

impl From<UserProfile> for user_profile::ActiveModel {
    fn from(value: UserProfile) -> Self {
        Self {
            id: Set(value.id),
            created_date: Set(value.created_date),
            last_modified: Set(value.last_modified),
            user_id: Set(value.user_id),
            role: Set(value.role.into()),
            center_id: Set(value.center_id),
            phone: Set(value.phone),
            passport_number: Set(value.passport_number),
            birthday: Set(value.birthday),
            is_blocked: Set(value.is_blocked),
        }
    }
}

impl From<user_profile::Model> for UserProfile {
    fn from(value: user_profile::Model) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            last_modified: value.last_modified,
            user_id: value.user_id,
            role: value.role.into(),
            center_id: value.center_id,
            phone: value.phone,
            passport_number: value.passport_number,
            birthday: value.birthday,
            is_blocked: value.is_blocked,
        }
    }
}

impl IntoSortingColumn for SortableUserColumn {
    fn get_column(&self) -> SimpleExpr {
        match self {
            Self::Username => user::Column::Username,
            Self::CreatedDate => user::Column::CreatedDate,
        }
        .into_simple_expr()
    }
}

impl IntoFilterCondition for UserFilter {
    fn get_condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(username) = &self.username {
            condition = condition.add(user::Column::Username.starts_with(username));
        }
        if let Some(role) = self.role {
            condition = condition.add(
                user::Column::Id.in_subquery(
                    sea_orm::sea_query::Query::select()
                        .column(user_profile::Column::UserId)
                        .from(user_profile::Entity)
                        .and_where(
                            user_profile::Column::Role.eq(user_profile::Role::from(role)),
                        )
                        .to_owned(),
                ),
            );
        }
        condition
    }
}
