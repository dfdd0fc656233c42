use shared_types::{LessonId, TeacherId};

use super::error::DataLayerError;
use crate::model::common::GetListResponse;
use crate::model::lesson::{Lesson, LessonListQuery, UpdateLessonRequest};
use crate::model::scope::VisibilityScope;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait LessonRepository: Send + Sync {
    async fn create_lesson(&self, request: Lesson) -> Result<LessonId, DataLayerError>;

    async fn get_lesson(
        &self,
        id: &LessonId,
        scope: &VisibilityScope,
    ) -> Result<Option<Lesson>, DataLayerError>;

    async fn get_lesson_list(
        &self,
        query: LessonListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Lesson>, DataLayerError>;

    /// All lessons a teacher holds, directly or through group ownership,
    /// ordered by date and start time.
    async fn get_teacher_schedule(
        &self,
        teacher_id: &TeacherId,
        scope: &VisibilityScope,
    ) -> Result<Vec<Lesson>, DataLayerError>;

    async fn update_lesson(&self, request: UpdateLessonRequest) -> Result<(), DataLayerError>;

    async fn delete_lesson(&self, id: &LessonId) -> Result<(), DataLayerError>;
}
