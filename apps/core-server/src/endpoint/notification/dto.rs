use campus_core::model::notification::Notification;
use campus_core::service::notification::dto::CreateNotificationRequest;
use one_dto_mapper::{From, Into, convert_inner};
use serde::{Deserialize, Serialize};
use shared_types::{NotificationId, UserId};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::{GetListResponseRestDTO, ListQueryParamsRest};

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(CreateNotificationRequest)]
pub(crate) struct CreateNotificationRequestRestDTO {
    pub user_id: UserId,
    pub notification_type: NotificationTypeRestEnum,
    pub title: String,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(Notification)]
pub(crate) struct NotificationResponseRestDTO {
    pub id: NotificationId,
    pub created_date: OffsetDateTime,
    pub user_id: UserId,
    pub notification_type: NotificationTypeRestEnum,
    pub title: String,
    pub message: String,
    pub is_read: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, ToSchema, From, Into)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from("campus_core::model::notification::NotificationType")]
#[into("campus_core::model::notification::NotificationType")]
pub(crate) enum NotificationTypeRestEnum {
    PaymentReminder,
    AttendanceAlert,
    ExamNotification,
    SystemAlert,
    GroupNotification,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::notification::SortableNotificationColumn")]
pub(crate) enum SortableNotificationColumnRestDTO {
    CreatedDate,
}

#[derive(Clone, Debug, Deserialize, IntoParams, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::notification::NotificationFilter")]
pub(crate) struct NotificationFilterQueryParamsRest {
    #[param(inline, nullable = false)]
    #[into(with_fn = convert_inner)]
    pub notification_type: Option<NotificationTypeRestEnum>,
    #[param(nullable = false)]
    pub is_read: Option<bool>,
}

pub(crate) type GetNotificationsQuery =
    ListQueryParamsRest<NotificationFilterQueryParamsRest, SortableNotificationColumnRestDTO>;

pub(crate) type GetNotificationListResponseRestDTO =
    GetListResponseRestDTO<NotificationResponseRestDTO>;
