use autometrics::autometrics;
use campus_core::model::common::GetListResponse;
use campus_core::model::contract::{Contract, ContractListQuery};
use campus_core::model::scope::VisibilityScope;
use campus_core::repository::contract_repository::ContractRepository;
use campus_core::repository::error::DataLayerError;
use one_dto_mapper::convert_inner;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use shared_types::{ContractId, ProfileId};

use super::ContractProvider;
use crate::entity::contract;
use crate::list_query::{SelectWithListQuery, total_pages};
use crate::mapper::to_data_layer_error;
use crate::scope;

#[autometrics]
#[async_trait::async_trait]
impl ContractRepository for ContractProvider {
    async fn create_contract(&self, request: Contract) -> Result<ContractId, DataLayerError> {
        let contract = contract::Entity::insert(contract::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(contract.last_insert_id)
    }

    async fn get_contract(
        &self,
        id: &ContractId,
        scope: &VisibilityScope,
    ) -> Result<Option<Contract>, DataLayerError> {
        let contract = contract::Entity::find_by_id(id)
            .filter(scope::contract_condition(scope))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(contract))
    }

    async fn get_contract_list(
        &self,
        query: ContractListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Contract>, DataLayerError> {
        let filtered = contract::Entity::find()
            .filter(scope::contract_condition(scope))
            .with_filtering(&query);

        let total_items = filtered
            .clone()
            .count(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let contracts: Vec<contract::Model> = filtered
            .with_sorting_and_pagination(&query)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(GetListResponse {
            total_pages: total_pages(total_items, query.pagination.as_ref()),
            total_items,
            values: convert_inner(contracts),
        })
    }

    async fn set_verified(
        &self,
        id: &ContractId,
        verified_by_id: ProfileId,
    ) -> Result<(), DataLayerError> {
        let result = contract::Entity::update_many()
            .col_expr(contract::Column::IsVerified, Expr::value(true))
            .col_expr(
                contract::Column::VerifiedById,
                Expr::value(Some(verified_by_id)),
            )
            .filter(contract::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotUpdated);
        }
        Ok(())
    }

    async fn delete_contract(&self, id: &ContractId) -> Result<(), DataLayerError> {
        let result = contract::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotFound);
        }
        Ok(())
    }
}
