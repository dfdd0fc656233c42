use shared_types::CenterId;

use super::error::DataLayerError;
use crate::model::center::{Center, CenterListQuery, UpdateCenterRequest};
use crate::model::common::GetListResponse;
use crate::model::scope::VisibilityScope;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait CenterRepository: Send + Sync {
    async fn create_center(&self, request: Center) -> Result<CenterId, DataLayerError>;

    async fn get_center(
        &self,
        id: &CenterId,
        scope: &VisibilityScope,
    ) -> Result<Option<Center>, DataLayerError>;

    async fn get_center_list(
        &self,
        query: CenterListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Center>, DataLayerError>;

    async fn update_center(&self, request: UpdateCenterRequest) -> Result<(), DataLayerError>;

    async fn delete_center(&self, id: &CenterId) -> Result<(), DataLayerError>;
}
