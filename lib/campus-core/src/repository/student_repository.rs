use shared_types::{StudentId, UserId};

use super::error::DataLayerError;
use crate::model::common::GetListResponse;
use crate::model::scope::VisibilityScope;
use crate::model::student::{Student, StudentListQuery, UpdateStudentRequest};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait StudentRepository: Send + Sync {
    async fn create_student(&self, request: Student) -> Result<StudentId, DataLayerError>;

    async fn get_student(
        &self,
        id: &StudentId,
        scope: &VisibilityScope,
    ) -> Result<Option<Student>, DataLayerError>;

    /// Principal resolution; deliberately unscoped.
    async fn get_student_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Student>, DataLayerError>;

    async fn get_student_list(
        &self,
        query: StudentListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Student>, DataLayerError>;

    async fn update_student(&self, request: UpdateStudentRequest) -> Result<(), DataLayerError>;

    async fn delete_student(&self, id: &StudentId) -> Result<(), DataLayerError>;
}
