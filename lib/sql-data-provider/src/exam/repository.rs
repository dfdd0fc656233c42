use autometrics::autometrics;
use campus_core::model::common::GetListResponse;
use campus_core::model::exam::{Exam, ExamListQuery, UpdateExamRequest};
use campus_core::model::scope::VisibilityScope;
use campus_core::repository::error::DataLayerError;
use campus_core::repository::exam_repository::ExamRepository;
use one_dto_mapper::convert_inner;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use shared_types::ExamId;

use super::ExamProvider;
use crate::entity::exam;
use crate::list_query::{SelectWithListQuery, total_pages};
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};
use crate::scope;

#[autometrics]
#[async_trait::async_trait]
impl ExamRepository for ExamProvider {
    async fn create_exam(&self, request: Exam) -> Result<ExamId, DataLayerError> {
        let exam = exam::Entity::insert(exam::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(exam.last_insert_id)
    }

    async fn get_exam(
        &self,
        id: &ExamId,
        scope: &VisibilityScope,
    ) -> Result<Option<Exam>, DataLayerError> {
        let exam = exam::Entity::find_by_id(id)
            .filter(scope::exam_condition(scope))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(exam))
    }

    async fn get_exam_list(
        &self,
        query: ExamListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Exam>, DataLayerError> {
        let filtered = exam::Entity::find()
            .filter(scope::exam_condition(scope))
            .with_filtering(&query);

        let total_items = filtered
            .clone()
            .count(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let exams: Vec<exam::Model> = filtered
            .with_sorting_and_pagination(&query)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(GetListResponse {
            total_pages: total_pages(total_items, query.pagination.as_ref()),
            total_items,
            values: convert_inner(exams),
        })
    }

    async fn update_exam(&self, request: UpdateExamRequest) -> Result<(), DataLayerError> {
        exam::Entity::update(exam::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_update_data_layer_error)?;
        Ok(())
    }

    async fn set_results_published(
        &self,
        id: &ExamId,
        published: bool,
    ) -> Result<(), DataLayerError> {
        let result = exam::Entity::update_many()
            .col_expr(exam::Column::ResultsPublished, Expr::value(published))
            .filter(exam::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotUpdated);
        }
        Ok(())
    }

    async fn delete_exam(&self, id: &ExamId) -> Result<(), DataLayerError> {
        let result = exam::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotFound);
        }
        Ok(())
    }
}
