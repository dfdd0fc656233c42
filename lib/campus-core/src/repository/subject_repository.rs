use shared_types::SubjectId;

use super::error::DataLayerError;
use crate::model::center::{Subject, SubjectListQuery};
use crate::model::common::GetListResponse;
use crate::model::scope::VisibilityScope;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait SubjectRepository: Send + Sync {
    async fn create_subject(&self, request: Subject) -> Result<SubjectId, DataLayerError>;

    async fn get_subject(
        &self,
        id: &SubjectId,
        scope: &VisibilityScope,
    ) -> Result<Option<Subject>, DataLayerError>;

    async fn get_subject_list(
        &self,
        query: SubjectListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Subject>, DataLayerError>;

    async fn delete_subject(&self, id: &SubjectId) -> Result<(), DataLayerError>;
}
