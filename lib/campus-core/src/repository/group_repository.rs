use shared_types::GroupId;

use super::error::DataLayerError;
use crate::model::common::GetListResponse;
use crate::model::group::{Group, GroupListQuery, UpdateGroupRequest};
use crate::model::scope::VisibilityScope;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait GroupRepository: Send + Sync {
    async fn create_group(&self, request: Group) -> Result<GroupId, DataLayerError>;

    async fn get_group(
        &self,
        id: &GroupId,
        scope: &VisibilityScope,
    ) -> Result<Option<Group>, DataLayerError>;

    async fn get_group_list(
        &self,
        query: GroupListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Group>, DataLayerError>;

    async fn update_group(&self, request: UpdateGroupRequest) -> Result<(), DataLayerError>;

    async fn delete_group(&self, id: &GroupId) -> Result<(), DataLayerError>;
}
