use sea_orm::DatabaseConnection;

mod mapper;
pub mod repository;

pub(crate) struct AssignmentProvider {
    pub db: DatabaseConnection,
}
