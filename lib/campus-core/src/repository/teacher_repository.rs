use shared_types::{TeacherId, UserId};

use super::error::DataLayerError;
use crate::model::common::GetListResponse;
use crate::model::scope::VisibilityScope;
use crate::model::teacher::{Teacher, TeacherListQuery, UpdateTeacherRequest};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait TeacherRepository: Send + Sync {
    async fn create_teacher(&self, request: Teacher) -> Result<TeacherId, DataLayerError>;

    async fn get_teacher(
        &self,
        id: &TeacherId,
        scope: &VisibilityScope,
    ) -> Result<Option<Teacher>, DataLayerError>;

    /// Principal resolution; deliberately unscoped.
    async fn get_teacher_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Teacher>, DataLayerError>;

    async fn get_teacher_list(
        &self,
        query: TeacherListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Teacher>, DataLayerError>;

    async fn update_teacher(&self, request: UpdateTeacherRequest) -> Result<(), DataLayerError>;

    async fn delete_teacher(&self, id: &TeacherId) -> Result<(), DataLayerError>;
}
