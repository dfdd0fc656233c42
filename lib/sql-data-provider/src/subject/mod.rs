use sea_orm::DatabaseConnection;

mod mapper;
pub mod repository;

pub(crate) struct SubjectProvider {
    pub db: DatabaseConnection,
}
