use autometrics::autometrics;
use campus_core::model::branch::{Branch, BranchListQuery, UpdateBranchRequest};
use campus_core::model::common::GetListResponse;
use campus_core::model::scope::VisibilityScope;
use campus_core::repository::branch_repository::BranchRepository;
use campus_core::repository::error::DataLayerError;
use one_dto_mapper::convert_inner;
use sea_orm::{EntityTrait, PaginatorTrait, QueryFilter};
use shared_types::BranchId;

use super::BranchProvider;
use crate::entity::branch;
use crate::list_query::{SelectWithListQuery, total_pages};
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};
use crate::scope;

#[autometrics]
#[async_trait::async_trait]
impl BranchRepository for BranchProvider {
    async fn create_branch(&self, request: Branch) -> Result<BranchId, DataLayerError> {
        let branch = branch::Entity::insert(branch::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(branch.last_insert_id)
    }

    async fn get_branch(
        &self,
        id: &BranchId,
        scope: &VisibilityScope,
    ) -> Result<Option<Branch>, DataLayerError> {
        let branch = branch::Entity::find_by_id(id)
            .filter(scope::branch_condition(scope))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(branch))
    }

    async fn get_branch_list(
        &self,
        query: BranchListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Branch>, DataLayerError> {
        let filtered = branch::Entity::find()
            .filter(scope::branch_condition(scope))
            .with_filtering(&query);

        let total_items = filtered
            .clone()
            .count(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let branches: Vec<branch::Model> = filtered
            .with_sorting_and_pagination(&query)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(GetListResponse {
            total_pages: total_pages(total_items, query.pagination.as_ref()),
            total_items,
            values: convert_inner(branches),
        })
    }

    async fn update_branch(&self, request: UpdateBranchRequest) -> Result<(), DataLayerError> {
        branch::Entity::update(branch::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_update_data_layer_error)?;
        Ok(())
    }

    async fn delete_branch(&self, id: &BranchId) -> Result<(), DataLayerError> {
        let result = branch::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotFound);
        }
        Ok(())
    }
}
