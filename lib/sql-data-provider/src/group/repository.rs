use autometrics::autometrics;
use campus_core::model::common::GetListResponse;
use campus_core::model::group::{Group, GroupListQuery, UpdateGroupRequest};
use campus_core::model::scope::VisibilityScope;
use campus_core::repository::error::DataLayerError;
use campus_core::repository::group_repository::GroupRepository;
use one_dto_mapper::convert_inner;
use sea_orm::{EntityTrait, PaginatorTrait, QueryFilter};
use shared_types::GroupId;

use super::GroupProvider;
use crate::entity::group;
use crate::list_query::{SelectWithListQuery, total_pages};
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};
use crate::scope;

#[autometrics]
#[async_trait::async_trait]
impl GroupRepository for GroupProvider {
    async fn create_group(&self, request: Group) -> Result<GroupId, DataLayerError> {
        let group = group::Entity::insert(group::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(group.last_insert_id)
    }

    async fn get_group(
        &self,
        id: &GroupId,
        scope: &VisibilityScope,
    ) -> Result<Option<Group>, DataLayerError> {
        let group = group::Entity::find_by_id(id)
            .filter(scope::group_condition(scope))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(group))
    }

    async fn get_group_list(
        &self,
        query: GroupListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Group>, DataLayerError> {
        let filtered = group::Entity::find()
            .filter(scope::group_condition(scope))
            .with_filtering(&query);

        let total_items = filtered
            .clone()
            .count(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let groups: Vec<group::Model> = filtered
            .with_sorting_and_pagination(&query)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(GetListResponse {
            total_pages: total_pages(total_items, query.pagination.as_ref()),
            total_items,
            values: convert_inner(groups),
        })
    }

    async fn update_group(&self, request: UpdateGroupRequest) -> Result<(), DataLayerError> {
        group::Entity::update(group::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_update_data_layer_error)?;
        Ok(())
    }

    async fn delete_group(&self, id: &GroupId) -> Result<(), DataLayerError> {
        let result = group::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotFound);
        }
        Ok(())
    }
}
