use campus_core::model::notification::{
    Notification, NotificationFilter, SortableNotificationColumn,
};
use sea_orm::IntoSimpleExpr;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Condition, Set};

use crate::entity::notification;
use crate::list_query::{IntoFilterCondition, IntoSortingColumn};

impl From<Notification> for notification::ActiveModel {
    fn from(value: Notification) -> Self {
        Self {
            id: Set(value.id),
            created_date: Set(value.created_date),
            user_id: Set(value.user_id),
            notification_type: Set(value.notification_type.into()),
            title: Set(value.title),
            message: Set(value.message),
            is_read: Set(value.is_read),
        }
    }
}

impl From<notification::Model> for Notification {
    fn from(value: notification::Model) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            user_id: value.user_id,
            notification_type: value.notification_type.into(),
            title: value.title,
            message: value.message,
            is_read: value.is_read,
        }
    }
}

impl IntoSortingColumn for SortableNotificationColumn {
    fn get_column(&self) -> SimpleExpr {
        match self {
            Self::CreatedDate => notification::Column::CreatedDate,
        }
        .into_simple_expr()
    }
}

impl IntoFilterCondition for NotificationFilter {
    fn get_condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(notification_type) = self.notification_type {
            condition = condition.add(
                notification::Column::NotificationType
                    .eq(notification::NotificationType::from(notification_type)),
            );
        }
        if let Some(is_read) = self.is_read {
            condition = condition.add(notification::Column::IsRead.eq(is_read));
        }
        condition
    }
}
