use shared_types::{NotificationId, UserId};
use strum::{Display, EnumString};
use time::OffsetDateTime;

use super::common::ListQuery;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, EnumString)]
pub enum NotificationType {
    PaymentReminder,
    AttendanceAlert,
    ExamNotification,
    SystemAlert,
    GroupNotification,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub created_date: OffsetDateTime,
    pub user_id: UserId,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub is_read: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortableNotificationColumn {
    CreatedDate,
}

#[derive(Clone, Debug, Default)]
pub struct NotificationFilter {
    pub notification_type: Option<NotificationType>,
    pub is_read: Option<bool>,
}

pub type NotificationListQuery = ListQuery<SortableNotificationColumn, NotificationFilter>;
