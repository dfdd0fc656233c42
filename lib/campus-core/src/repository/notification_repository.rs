use shared_types::NotificationId;

use super::error::DataLayerError;
use crate::model::common::GetListResponse;
use crate::model::notification::{Notification, NotificationListQuery};
use crate::model::scope::VisibilityScope;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn create_notification(
        &self,
        request: Notification,
    ) -> Result<NotificationId, DataLayerError>;

    async fn get_notification(
        &self,
        id: &NotificationId,
        scope: &VisibilityScope,
    ) -> Result<Option<Notification>, DataLayerError>;

    async fn get_notification_list(
        &self,
        query: NotificationListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Notification>, DataLayerError>;

    async fn set_read(&self, id: &NotificationId) -> Result<(), DataLayerError>;

    async fn delete_notification(&self, id: &NotificationId) -> Result<(), DataLayerError>;
}
