use autometrics::autometrics;
use campus_core::model::common::GetListResponse;
use campus_core::model::scope::VisibilityScope;
use campus_core::model::teacher::{Teacher, TeacherListQuery, UpdateTeacherRequest};
use campus_core::repository::error::DataLayerError;
use campus_core::repository::teacher_repository::TeacherRepository;
use one_dto_mapper::convert_inner;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use shared_types::{TeacherId, UserId};

use super::TeacherProvider;
use crate::entity::teacher;
use crate::list_query::{SelectWithListQuery, total_pages};
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};
use crate::scope;

#[autometrics]
#[async_trait::async_trait]
impl TeacherRepository for TeacherProvider {
    async fn create_teacher(&self, request: Teacher) -> Result<TeacherId, DataLayerError> {
        let teacher = teacher::Entity::insert(teacher::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(teacher.last_insert_id)
    }

    async fn get_teacher(
        &self,
        id: &TeacherId,
        scope: &VisibilityScope,
    ) -> Result<Option<Teacher>, DataLayerError> {
        let teacher = teacher::Entity::find_by_id(id)
            .filter(scope::teacher_condition(scope))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(teacher))
    }

    async fn get_teacher_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Teacher>, DataLayerError> {
        let teacher = teacher::Entity::find()
            .filter(teacher::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(teacher))
    }

    async fn get_teacher_list(
        &self,
        query: TeacherListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Teacher>, DataLayerError> {
        let filtered = teacher::Entity::find()
            .filter(scope::teacher_condition(scope))
            .with_filtering(&query);

        let total_items = filtered
            .clone()
            .count(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let teachers: Vec<teacher::Model> = filtered
            .with_sorting_and_pagination(&query)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(GetListResponse {
            total_pages: total_pages(total_items, query.pagination.as_ref()),
            total_items,
            values: convert_inner(teachers),
        })
    }

    async fn update_teacher(&self, request: UpdateTeacherRequest) -> Result<(), DataLayerError> {
        teacher::Entity::update(teacher::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_update_data_layer_error)?;
        Ok(())
    }

    async fn delete_teacher(&self, id: &TeacherId) -> Result<(), DataLayerError> {
        let result = teacher::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotFound);
        }
        Ok(())
    }
}
