use shared_types::SubmissionId;
use time::OffsetDateTime;

use super::error::DataLayerError;
use crate::model::assignment::{AssignmentSubmission, SubmissionGrade, SubmissionListQuery};
use crate::model::common::GetListResponse;
use crate::model::scope::VisibilityScope;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Fails with [`DataLayerError::AlreadyExists`] when the student already
    /// submitted for this assignment.
    async fn create_submission(
        &self,
        request: AssignmentSubmission,
    ) -> Result<SubmissionId, DataLayerError>;

    async fn get_submission(
        &self,
        id: &SubmissionId,
        scope: &VisibilityScope,
    ) -> Result<Option<AssignmentSubmission>, DataLayerError>;

    async fn get_submission_list(
        &self,
        query: SubmissionListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<AssignmentSubmission>, DataLayerError>;

    async fn set_grade(
        &self,
        id: &SubmissionId,
        grade: SubmissionGrade,
        feedback: String,
        graded_at: OffsetDateTime,
    ) -> Result<(), DataLayerError>;

    async fn delete_submission(&self, id: &SubmissionId) -> Result<(), DataLayerError>;
}
