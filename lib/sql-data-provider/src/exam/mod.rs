use sea_orm::DatabaseConnection;

mod mapper;
pub mod repository;

pub(crate) struct ExamProvider {
    pub db: DatabaseConnection,
}
