use shared_types::UserId;

use super::error::DataLayerError;
use crate::model::common::GetListResponse;
use crate::model::scope::VisibilityScope;
use crate::model::user::{UpdateUserRequest, User, UserListQuery, UserProfile};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with [`DataLayerError::AlreadyExists`] on a duplicate username.
    async fn create_user(&self, request: User) -> Result<UserId, DataLayerError>;

    async fn get_user(
        &self,
        id: &UserId,
        scope: &VisibilityScope,
    ) -> Result<Option<User>, DataLayerError>;

    /// Bearer-token resolution; deliberately unscoped.
    async fn get_user_by_token(&self, token: &str) -> Result<Option<User>, DataLayerError>;

    async fn get_user_list(
        &self,
        query: UserListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<User>, DataLayerError>;

    async fn update_user(&self, request: UpdateUserRequest) -> Result<(), DataLayerError>;

    async fn create_profile(&self, request: UserProfile) -> Result<(), DataLayerError>;

    /// Profile lookup for principal resolution; deliberately unscoped.
    async fn get_profile_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<UserProfile>, DataLayerError>;

    async fn set_profile_blocked(
        &self,
        user_id: &UserId,
        blocked: bool,
    ) -> Result<(), DataLayerError>;
}
