use shared_types::AssignmentId;

use super::error::DataLayerError;
use crate::model::assignment::{Assignment, AssignmentListQuery, UpdateAssignmentRequest};
use crate::model::common::GetListResponse;
use crate::model::scope::VisibilityScope;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait AssignmentRepository: Send + Sync {
    async fn create_assignment(&self, request: Assignment)
    -> Result<AssignmentId, DataLayerError>;

    async fn get_assignment(
        &self,
        id: &AssignmentId,
        scope: &VisibilityScope,
    ) -> Result<Option<Assignment>, DataLayerError>;

    async fn get_assignment_list(
        &self,
        query: AssignmentListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Assignment>, DataLayerError>;

    async fn update_assignment(
        &self,
        request: UpdateAssignmentRequest,
    ) -> Result<(), DataLayerError>;

    async fn delete_assignment(&self, id: &AssignmentId) -> Result<(), DataLayerError>;
}
