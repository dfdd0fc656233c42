use autometrics::autometrics;
use campus_core::model::common::GetListResponse;
use campus_core::model::exam::{ExamResult, ExamResultListQuery};
use campus_core::model::scope::VisibilityScope;
use campus_core::repository::error::DataLayerError;
use campus_core::repository::exam_result_repository::ExamResultRepository;
use one_dto_mapper::convert_inner;
use sea_orm::{EntityTrait, PaginatorTrait, QueryFilter};
use shared_types::ExamResultId;

use super::ExamResultProvider;
use crate::entity::exam_result;
use crate::list_query::{SelectWithListQuery, total_pages};
use crate::mapper::to_data_layer_error;
use crate::scope;

#[autometrics]
#[async_trait::async_trait]
impl ExamResultRepository for ExamResultProvider {
    async fn create_exam_result(
        &self,
        request: ExamResult,
    ) -> Result<ExamResultId, DataLayerError> {
        let result = exam_result::Entity::insert(exam_result::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(result.last_insert_id)
    }

    async fn get_exam_result(
        &self,
        id: &ExamResultId,
        scope: &VisibilityScope,
    ) -> Result<Option<ExamResult>, DataLayerError> {
        let result = exam_result::Entity::find_by_id(id)
            .filter(scope::exam_result_condition(scope))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(result))
    }

    async fn get_exam_result_list(
        &self,
        query: ExamResultListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<ExamResult>, DataLayerError> {
        let filtered = exam_result::Entity::find()
            .filter(scope::exam_result_condition(scope))
            .with_filtering(&query);

        let total_items = filtered
            .clone()
            .count(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let results: Vec<exam_result::Model> = filtered
            .with_sorting_and_pagination(&query)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(GetListResponse {
            total_pages: total_pages(total_items, query.pagination.as_ref()),
            total_items,
            values: convert_inner(results),
        })
    }

    async fn delete_exam_result(&self, id: &ExamResultId) -> Result<(), DataLayerError> {
        let result = exam_result::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotFound);
        }
        Ok(())
    }
}
