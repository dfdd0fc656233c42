use shared_types::{ContractId, ProfileId};

use super::error::DataLayerError;
use crate::model::common::GetListResponse;
use crate::model::contract::{Contract, ContractListQuery};
use crate::model::scope::VisibilityScope;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait ContractRepository: Send + Sync {
    /// Fails with [`DataLayerError::AlreadyExists`] on a duplicate contract
    /// number.
    async fn create_contract(&self, request: Contract) -> Result<ContractId, DataLayerError>;

    async fn get_contract(
        &self,
        id: &ContractId,
        scope: &VisibilityScope,
    ) -> Result<Option<Contract>, DataLayerError>;

    async fn get_contract_list(
        &self,
        query: ContractListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Contract>, DataLayerError>;

    async fn set_verified(
        &self,
        id: &ContractId,
        verified_by_id: ProfileId,
    ) -> Result<(), DataLayerError>;

    async fn delete_contract(&self, id: &ContractId) -> Result<(), DataLayerError>;
}
