use autometrics::autometrics;
use campus_core::model::assignment::{Assignment, AssignmentListQuery, UpdateAssignmentRequest};
use campus_core::model::common::GetListResponse;
use campus_core::model::scope::VisibilityScope;
use campus_core::repository::assignment_repository::AssignmentRepository;
use campus_core::repository::error::DataLayerError;
use one_dto_mapper::convert_inner;
use sea_orm::{EntityTrait, PaginatorTrait, QueryFilter};
use shared_types::AssignmentId;

use super::AssignmentProvider;
use crate::entity::assignment;
use crate::list_query::{SelectWithListQuery, total_pages};
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};
use crate::scope;

#[autometrics]
#[async_trait::async_trait]
impl AssignmentRepository for AssignmentProvider {
    async fn create_assignment(
        &self,
        request: Assignment,
    ) -> Result<AssignmentId, DataLayerError> {
        let assignment = assignment::Entity::insert(assignment::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(assignment.last_insert_id)
    }

    async fn get_assignment(
        &self,
        id: &AssignmentId,
        scope: &VisibilityScope,
    ) -> Result<Option<Assignment>, DataLayerError> {
        let assignment = assignment::Entity::find_by_id(id)
            .filter(scope::assignment_condition(scope))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(assignment))
    }

    async fn get_assignment_list(
        &self,
        query: AssignmentListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Assignment>, DataLayerError> {
        let filtered = assignment::Entity::find()
            .filter(scope::assignment_condition(scope))
            .with_filtering(&query);

        let total_items = filtered
            .clone()
            .count(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let assignments: Vec<assignment::Model> = filtered
            .with_sorting_and_pagination(&query)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(GetListResponse {
            total_pages: total_pages(total_items, query.pagination.as_ref()),
            total_items,
            values: convert_inner(assignments),
        })
    }

    async fn update_assignment(
        &self,
        request: UpdateAssignmentRequest,
    ) -> Result<(), DataLayerError> {
        assignment::Entity::update(assignment::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_update_data_layer_error)?;
        Ok(())
    }

    async fn delete_assignment(&self, id: &AssignmentId) -> Result<(), DataLayerError> {
        let result = assignment::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotFound);
        }
        Ok(())
    }
}
