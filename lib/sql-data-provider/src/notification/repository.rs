use autometrics::autometrics;
use campus_core::model::common::GetListResponse;
use campus_core::model::notification::{Notification, NotificationListQuery};
use campus_core::model::scope::VisibilityScope;
use campus_core::repository::error::DataLayerError;
use campus_core::repository::notification_repository::NotificationRepository;
use one_dto_mapper::convert_inner;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use shared_types::NotificationId;

use super::NotificationProvider;
use crate::entity::notification;
use crate::list_query::{SelectWithListQuery, total_pages};
use crate::mapper::to_data_layer_error;
use crate::scope;

#[autometrics]
#[async_trait::async_trait]
impl NotificationRepository for NotificationProvider {
    async fn create_notification(
        &self,
        request: Notification,
    ) -> Result<NotificationId, DataLayerError> {
        let notification =
            notification::Entity::insert(notification::ActiveModel::from(request))
                .exec(&self.db)
                .await
                .map_err(to_data_layer_error)?;

        Ok(notification.last_insert_id)
    }

    async fn get_notification(
        &self,
        id: &NotificationId,
        scope: &VisibilityScope,
    ) -> Result<Option<Notification>, DataLayerError> {
        let notification = notification::Entity::find_by_id(id)
            .filter(scope::notification_condition(scope))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(notification))
    }

    async fn get_notification_list(
        &self,
        query: NotificationListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Notification>, DataLayerError> {
        let filtered = notification::Entity::find()
            .filter(scope::notification_condition(scope))
            .with_filtering(&query);

        let total_items = filtered
            .clone()
            .count(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let notifications: Vec<notification::Model> = filtered
            .with_sorting_and_pagination(&query)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(GetListResponse {
            total_pages: total_pages(total_items, query.pagination.as_ref()),
            total_items,
            values: convert_inner(notifications),
        })
    }

    async fn set_read(&self, id: &NotificationId) -> Result<(), DataLayerError> {
        let result = notification::Entity::update_many()
            .col_expr(notification::Column::IsRead, Expr::value(true))
            .filter(notification::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotUpdated);
        }
        Ok(())
    }

    async fn delete_notification(&self, id: &NotificationId) -> Result<(), DataLayerError> {
        let result = notification::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotFound);
        }
        Ok(())
    }
}
