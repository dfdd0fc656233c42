use shared_types::LeadId;

use super::error::DataLayerError;
use crate::model::common::GetListResponse;
use crate::model::lead::{Lead, LeadListQuery, LeadSourceCount, UpdateLeadRequest};
use crate::model::scope::VisibilityScope;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait LeadRepository: Send + Sync {
    async fn create_lead(&self, request: Lead) -> Result<LeadId, DataLayerError>;

    async fn get_lead(
        &self,
        id: &LeadId,
        scope: &VisibilityScope,
    ) -> Result<Option<Lead>, DataLayerError>;

    async fn get_lead_list(
        &self,
        query: LeadListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Lead>, DataLayerError>;

    /// Lead counts grouped by acquisition source; sources without leads in
    /// scope are absent.
    async fn get_lead_source_counts(
        &self,
        scope: &VisibilityScope,
    ) -> Result<Vec<LeadSourceCount>, DataLayerError>;

    async fn update_lead(&self, request: UpdateLeadRequest) -> Result<(), DataLayerError>;

    async fn delete_lead(&self, id: &LeadId) -> Result<(), DataLayerError>;
}
