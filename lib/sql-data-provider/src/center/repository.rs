use autometrics::autometrics;
use campus_core::model::center::{Center, CenterListQuery, UpdateCenterRequest};
use campus_core::model::common::GetListResponse;
use campus_core::model::scope::VisibilityScope;
use campus_core::repository::center_repository::CenterRepository;
use campus_core::repository::error::DataLayerError;
use one_dto_mapper::convert_inner;
use sea_orm::{EntityTrait, PaginatorTrait, QueryFilter};
use shared_types::CenterId;

use super::CenterProvider;
use crate::entity::center;
use crate::list_query::{SelectWithListQuery, total_pages};
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};
use crate::scope;

#[autometrics]
#[async_trait::async_trait]
impl CenterRepository for CenterProvider {
    async fn create_center(&self, request: Center) -> Result<CenterId, DataLayerError> {
        let center = center::Entity::insert(center::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(center.last_insert_id)
    }

    async fn get_center(
        &self,
        id: &CenterId,
        scope: &VisibilityScope,
    ) -> Result<Option<Center>, DataLayerError> {
        let center = center::Entity::find_by_id(id)
            .filter(scope::center_condition(scope))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(center))
    }

    async fn get_center_list(
        &self,
        query: CenterListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Center>, DataLayerError> {
        let filtered = center::Entity::find()
            .filter(scope::center_condition(scope))
            .with_filtering(&query);

        let total_items = filtered
            .clone()
            .count(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let centers: Vec<center::Model> = filtered
            .with_sorting_and_pagination(&query)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(GetListResponse {
            total_pages: total_pages(total_items, query.pagination.as_ref()),
            total_items,
            values: convert_inner(centers),
        })
    }

    async fn update_center(&self, request: UpdateCenterRequest) -> Result<(), DataLayerError> {
        center::Entity::update(center::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_update_data_layer_error)?;
        Ok(())
    }

    async fn delete_center(&self, id: &CenterId) -> Result<(), DataLayerError> {
        let result = center::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotFound);
        }
        Ok(())
    }
}
