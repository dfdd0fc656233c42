use sea_orm::DatabaseConnection;

mod mapper;
pub mod repository;

pub(crate) struct NotificationProvider {
    pub db: DatabaseConnection,
}
