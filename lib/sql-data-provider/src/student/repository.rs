use autometrics::autometrics;
use campus_core::model::common::GetListResponse;
use campus_core::model::scope::VisibilityScope;
use campus_core::model::student::{Student, StudentListQuery, UpdateStudentRequest};
use campus_core::repository::error::DataLayerError;
use campus_core::repository::student_repository::StudentRepository;
use one_dto_mapper::convert_inner;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use shared_types::{StudentId, UserId};

use super::StudentProvider;
use crate::entity::student;
use crate::list_query::{SelectWithListQuery, total_pages};
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};
use crate::scope;

#[autometrics]
#[async_trait::async_trait]
impl StudentRepository for StudentProvider {
    async fn create_student(&self, request: Student) -> Result<StudentId, DataLayerError> {
        let student = student::Entity::insert(student::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(student.last_insert_id)
    }

    async fn get_student(
        &self,
        id: &StudentId,
        scope: &VisibilityScope,
    ) -> Result<Option<Student>, DataLayerError> {
        let student = student::Entity::find_by_id(id)
            .filter(scope::student_condition(scope))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(student))
    }

    async fn get_student_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Student>, DataLayerError> {
        let student = student::Entity::find()
            .filter(student::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(student))
    }

    async fn get_student_list(
        &self,
        query: StudentListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Student>, DataLayerError> {
        let filtered = student::Entity::find()
            .filter(scope::student_condition(scope))
            .with_filtering(&query);

        let total_items = filtered
            .clone()
            .count(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let students: Vec<student::Model> = filtered
            .with_sorting_and_pagination(&query)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(GetListResponse {
            total_pages: total_pages(total_items, query.pagination.as_ref()),
            total_items,
            values: convert_inner(students),
        })
    }

    async fn update_student(&self, request: UpdateStudentRequest) -> Result<(), DataLayerError> {
        student::Entity::update(student::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_update_data_layer_error)?;
        Ok(())
    }

    async fn delete_student(&self, id: &StudentId) -> Result<(), DataLayerError> {
        let result = student::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotFound);
        }
        Ok(())
    }
}
