use autometrics::autometrics;
use campus_core::model::center::{Subject, SubjectListQuery};
use campus_core::model::common::GetListResponse;
use campus_core::model::scope::VisibilityScope;
use campus_core::repository::error::DataLayerError;
use campus_core::repository::subject_repository::SubjectRepository;
use one_dto_mapper::convert_inner;
use sea_orm::{EntityTrait, PaginatorTrait, QueryFilter};
use shared_types::SubjectId;

use super::SubjectProvider;
use crate::entity::subject;
use crate::list_query::{SelectWithListQuery, total_pages};
use crate::mapper::to_data_layer_error;
use crate::scope;

#[autometrics]
#[async_trait::async_trait]
impl SubjectRepository for SubjectProvider {
    async fn create_subject(&self, request: Subject) -> Result<SubjectId, DataLayerError> {
        let subject = subject::Entity::insert(subject::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(subject.last_insert_id)
    }

    async fn get_subject(
        &self,
        id: &SubjectId,
        scope: &VisibilityScope,
    ) -> Result<Option<Subject>, DataLayerError> {
        let subject = subject::Entity::find_by_id(id)
            .filter(scope::subject_condition(scope))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(subject))
    }

    async fn get_subject_list(
        &self,
        query: SubjectListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Subject>, DataLayerError> {
        let filtered = subject::Entity::find()
            .filter(scope::subject_condition(scope))
            .with_filtering(&query);

        let total_items = filtered
            .clone()
            .count(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let subjects: Vec<subject::Model> = filtered
            .with_sorting_and_pagination(&query)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(GetListResponse {
            total_pages: total_pages(total_items, query.pagination.as_ref()),
            total_items,
            values: convert_inner(subjects),
        })
    }

    async fn delete_subject(&self, id: &SubjectId) -> Result<(), DataLayerError> {
        let result = subject::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotFound);
        }
        Ok(())
    }
}
