use shared_types::BranchId;

use super::error::DataLayerError;
use crate::model::branch::{Branch, BranchListQuery, UpdateBranchRequest};
use crate::model::common::GetListResponse;
use crate::model::scope::VisibilityScope;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait BranchRepository: Send + Sync {
    async fn create_branch(&self, request: Branch) -> Result<BranchId, DataLayerError>;

    async fn get_branch(
        &self,
        id: &BranchId,
        scope: &VisibilityScope,
    ) -> Result<Option<Branch>, DataLayerError>;

    async fn get_branch_list(
        &self,
        query: BranchListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Branch>, DataLayerError>;

    async fn update_branch(&self, request: UpdateBranchRequest) -> Result<(), DataLayerError>;

    async fn delete_branch(&self, id: &BranchId) -> Result<(), DataLayerError>;
}
