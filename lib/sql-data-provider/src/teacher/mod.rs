use sea_orm::DatabaseConnection;

mod mapper;
pub mod repository;

pub(crate) struct TeacherProvider {
    pub db: DatabaseConnection,
}
