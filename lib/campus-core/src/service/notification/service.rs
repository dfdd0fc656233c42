use shared_types::NotificationId;
use time::OffsetDateTime;
use uuid::Uuid;

use super::NotificationService;
use super::dto::CreateNotificationRequest;
use crate::model::common::GetListResponse;
use crate::model::notification::{Notification, NotificationListQuery};
use crate::model::scope::{Principal, Resource, scope_for};
use crate::service::error::{EntityNotFoundError, ServiceError, ValidationError};

impl NotificationService {
    pub async fn create_notification(
        &self,
        principal: &Principal,
        request: CreateNotificationRequest,
    ) -> Result<NotificationId, ServiceError> {
        if !principal.is_super_admin() && !principal.is_center_staff() {
            return Err(ValidationError::Forbidden.into());
        }
        let notification = Notification {
            id: Uuid::new_v4().into(),
            created_date: OffsetDateTime::now_utc(),
            user_id: request.user_id,
            notification_type: request.notification_type,
            title: request.title,
            message: request.message,
            is_read: false,
        };
        let id = self
            .notification_repository
            .create_notification(notification)
            .await?;
        Ok(id)
    }

    pub async fn get_notification(
        &self,
        principal: &Principal,
        id: &NotificationId,
    ) -> Result<Notification, ServiceError> {
        let scope = scope_for(principal, Resource::Notification);
        self.notification_repository
            .get_notification(id, &scope)
            .await?
            .ok_or_else(|| EntityNotFoundError::Notification(*id).into())
    }

    pub async fn get_notification_list(
        &self,
        principal: &Principal,
        query: NotificationListQuery,
    ) -> Result<GetListResponse<Notification>, ServiceError> {
        let scope = scope_for(principal, Resource::Notification);
        Ok(self
            .notification_repository
            .get_notification_list(query, &scope)
            .await?)
    }

    /// Idempotent.
    pub async fn mark_read(
        &self,
        principal: &Principal,
        id: &NotificationId,
    ) -> Result<(), ServiceError> {
        let notification = self.get_notification(principal, id).await?;
        if notification.is_read {
            return Ok(());
        }
        self.notification_repository.set_read(id).await?;
        Ok(())
    }

    pub async fn delete_notification(
        &self,
        principal: &Principal,
        id: &NotificationId,
    ) -> Result<(), ServiceError> {
        self.get_notification(principal, id).await?;
        self.notification_repository.delete_notification(id).await?;
        Ok(())
    }
}
