use one_dto_mapper::{From, Into};
use sea_orm::entity::prelude::*;
use shared_types::{NotificationId, UserId};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "notification")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: NotificationId,
    pub created_date: OffsetDateTime,
    pub user_id: UserId,
    pub notification_type: NotificationType,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub is_read: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Copy, Clone, Debug, Eq, PartialEq, EnumIter, DeriveActiveEnum, From, Into)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[from(campus_core::model::notification::NotificationType)]
#[into(campus_core::model::notification::NotificationType)]
pub enum NotificationType {
    #[sea_orm(string_value = "PAYMENT_REMINDER")]
    PaymentReminder,
    #[sea_orm(string_value = "ATTENDANCE_ALERT")]
    AttendanceAlert,
    #[sea_orm(string_value = "EXAM_NOTIFICATION")]
    ExamNotification,
    #[sea_orm(string_value = "SYSTEM_ALERT")]
    SystemAlert,
    #[sea_orm(string_value = "GROUP_NOTIFICATION")]
    GroupNotification,
}
