use autometrics::autometrics;
use campus_core::model::assignment::{
    AssignmentSubmission, SubmissionGrade, SubmissionListQuery,
};
use campus_core::model::common::GetListResponse;
use campus_core::model::scope::VisibilityScope;
use campus_core::repository::error::DataLayerError;
use campus_core::repository::submission_repository::SubmissionRepository;
use one_dto_mapper::convert_inner;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use shared_types::SubmissionId;
use time::OffsetDateTime;

use super::SubmissionProvider;
use crate::entity::assignment_submission;
use crate::list_query::{SelectWithListQuery, total_pages};
use crate::mapper::to_data_layer_error;
use crate::scope;

#[autometrics]
#[async_trait::async_trait]
impl SubmissionRepository for SubmissionProvider {
    async fn create_submission(
        &self,
        request: AssignmentSubmission,
    ) -> Result<SubmissionId, DataLayerError> {
        let submission = assignment_submission::Entity::insert(
            assignment_submission::ActiveModel::from(request),
        )
        .exec(&self.db)
        .await
        .map_err(to_data_layer_error)?;

        Ok(submission.last_insert_id)
    }

    async fn get_submission(
        &self,
        id: &SubmissionId,
        scope: &VisibilityScope,
    ) -> Result<Option<AssignmentSubmission>, DataLayerError> {
        let submission = assignment_submission::Entity::find_by_id(id)
            .filter(scope::submission_condition(scope))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(submission))
    }

    async fn get_submission_list(
        &self,
        query: SubmissionListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<AssignmentSubmission>, DataLayerError> {
        let filtered = assignment_submission::Entity::find()
            .filter(scope::submission_condition(scope))
            .with_filtering(&query);

        let total_items = filtered
            .clone()
            .count(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let submissions: Vec<assignment_submission::Model> = filtered
            .with_sorting_and_pagination(&query)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(GetListResponse {
            total_pages: total_pages(total_items, query.pagination.as_ref()),
            total_items,
            values: convert_inner(submissions),
        })
    }

    async fn set_grade(
        &self,
        id: &SubmissionId,
        grade: SubmissionGrade,
        feedback: String,
        graded_at: OffsetDateTime,
    ) -> Result<(), DataLayerError> {
        let result = assignment_submission::Entity::update_many()
            .col_expr(
                assignment_submission::Column::Grade,
                Expr::value(assignment_submission::SubmissionGrade::from(grade)),
            )
            .col_expr(assignment_submission::Column::Feedback, Expr::value(feedback))
            .col_expr(assignment_submission::Column::GradedAt, Expr::value(graded_at))
            .filter(assignment_submission::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotUpdated);
        }
        Ok(())
    }

    async fn delete_submission(&self, id: &SubmissionId) -> Result<(), DataLayerError> {
        let result = assignment_submission::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotFound);
        }
        Ok(())
    }
}
