use shared_types::ExamId;

use super::error::DataLayerError;
use crate::model::common::GetListResponse;
use crate::model::exam::{Exam, ExamListQuery, UpdateExamRequest};
use crate::model::scope::VisibilityScope;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait ExamRepository: Send + Sync {
    async fn create_exam(&self, request: Exam) -> Result<ExamId, DataLayerError>;

    async fn get_exam(
        &self,
        id: &ExamId,
        scope: &VisibilityScope,
    ) -> Result<Option<Exam>, DataLayerError>;

    async fn get_exam_list(
        &self,
        query: ExamListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Exam>, DataLayerError>;

    async fn update_exam(&self, request: UpdateExamRequest) -> Result<(), DataLayerError>;

    async fn set_results_published(
        &self,
        id: &ExamId,
        published: bool,
    ) -> Result<(), DataLayerError>;

    async fn delete_exam(&self, id: &ExamId) -> Result<(), DataLayerError>;
}
