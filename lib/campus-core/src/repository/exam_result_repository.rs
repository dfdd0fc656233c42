use shared_types::ExamResultId;

use super::error::DataLayerError;
use crate::model::common::GetListResponse;
use crate::model::exam::{ExamResult, ExamResultListQuery};
use crate::model::scope::VisibilityScope;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait ExamResultRepository: Send + Sync {
    /// Fails with [`DataLayerError::AlreadyExists`] when the (exam, student)
    /// pair already has an outcome.
    async fn create_exam_result(
        &self,
        request: ExamResult,
    ) -> Result<ExamResultId, DataLayerError>;

    async fn get_exam_result(
        &self,
        id: &ExamResultId,
        scope: &VisibilityScope,
    ) -> Result<Option<ExamResult>, DataLayerError>;

    async fn get_exam_result_list(
        &self,
        query: ExamResultListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<ExamResult>, DataLayerError>;

    async fn delete_exam_result(&self, id: &ExamResultId) -> Result<(), DataLayerError>;
}
