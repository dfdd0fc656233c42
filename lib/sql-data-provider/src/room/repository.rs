use autometrics::autometrics;
use campus_core::model::branch::{Room, RoomListQuery, UpdateRoomRequest};
use campus_core::model::common::GetListResponse;
use campus_core::model::scope::VisibilityScope;
use campus_core::repository::error::DataLayerError;
use campus_core::repository::room_repository::RoomRepository;
use one_dto_mapper::convert_inner;
use sea_orm::{EntityTrait, PaginatorTrait, QueryFilter};
use shared_types::RoomId;

use super::RoomProvider;
use crate::entity::room;
use crate::list_query::{SelectWithListQuery, total_pages};
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};
use crate::scope;

#[autometrics]
#[async_trait::async_trait]
impl RoomRepository for RoomProvider {
    async fn create_room(&self, request: Room) -> Result<RoomId, DataLayerError> {
        let room = room::Entity::insert(room::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(room.last_insert_id)
    }

    async fn get_room(
        &self,
        id: &RoomId,
        scope: &VisibilityScope,
    ) -> Result<Option<Room>, DataLayerError> {
        let room = room::Entity::find_by_id(id)
            .filter(scope::room_condition(scope))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(room))
    }

    async fn get_room_list(
        &self,
        query: RoomListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Room>, DataLayerError> {
        let filtered = room::Entity::find()
            .filter(scope::room_condition(scope))
            .with_filtering(&query);

        let total_items = filtered
            .clone()
            .count(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let rooms: Vec<room::Model> = filtered
            .with_sorting_and_pagination(&query)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(GetListResponse {
            total_pages: total_pages(total_items, query.pagination.as_ref()),
            total_items,
            values: convert_inner(rooms),
        })
    }

    async fn update_room(&self, request: UpdateRoomRequest) -> Result<(), DataLayerError> {
        room::Entity::update(room::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_update_data_layer_error)?;
        Ok(())
    }

    async fn delete_room(&self, id: &RoomId) -> Result<(), DataLayerError> {
        let result = room::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotFound);
        }
        Ok(())
    }
}
