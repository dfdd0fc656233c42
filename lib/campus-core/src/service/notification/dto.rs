use shared_types::UserId;

use crate::model::notification::NotificationType;

#[derive(Clone, Debug)]
pub struct CreateNotificationRequest {
    pub user_id: UserId,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
}
