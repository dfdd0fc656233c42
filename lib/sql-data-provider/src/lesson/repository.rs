use autometrics::autometrics;
use campus_core::model::common::GetListResponse;
use campus_core::model::lesson::{Lesson, LessonListQuery, UpdateLessonRequest};
use campus_core::model::scope::VisibilityScope;
use campus_core::repository::error::DataLayerError;
use campus_core::repository::lesson_repository::LessonRepository;
use one_dto_mapper::convert_inner;
use sea_orm::{EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use shared_types::{LessonId, TeacherId};

use super::LessonProvider;
use crate::entity::lesson;
use crate::list_query::{SelectWithListQuery, total_pages};
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};
use crate::scope;

#[autometrics]
#[async_trait::async_trait]
impl LessonRepository for LessonProvider {
    async fn create_lesson(&self, request: Lesson) -> Result<LessonId, DataLayerError> {
        let lesson = lesson::Entity::insert(lesson::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(lesson.last_insert_id)
    }

    async fn get_lesson(
        &self,
        id: &LessonId,
        scope: &VisibilityScope,
    ) -> Result<Option<Lesson>, DataLayerError> {
        let lesson = lesson::Entity::find_by_id(id)
            .filter(scope::lesson_condition(scope))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(lesson))
    }

    async fn get_lesson_list(
        &self,
        query: LessonListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Lesson>, DataLayerError> {
        let filtered = lesson::Entity::find()
            .filter(scope::lesson_condition(scope))
            .with_filtering(&query);

        let total_items = filtered
            .clone()
            .count(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let lessons: Vec<lesson::Model> = filtered
            .with_sorting_and_pagination(&query)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(GetListResponse {
            total_pages: total_pages(total_items, query.pagination.as_ref()),
            total_items,
            values: convert_inner(lessons),
        })
    }

    async fn get_teacher_schedule(
        &self,
        teacher_id: &TeacherId,
        scope: &VisibilityScope,
    ) -> Result<Vec<Lesson>, DataLayerError> {
        // the teacher-owned scope condition is exactly "lessons this teacher
        // holds", directly or through group ownership
        let lessons: Vec<lesson::Model> = lesson::Entity::find()
            .filter(scope::lesson_condition(scope))
            .filter(scope::lesson_condition(&VisibilityScope::TeacherOwned(
                *teacher_id,
            )))
            .order_by_asc(lesson::Column::Date)
            .order_by_asc(lesson::Column::StartTime)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(lessons))
    }

    async fn update_lesson(&self, request: UpdateLessonRequest) -> Result<(), DataLayerError> {
        lesson::Entity::update(lesson::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_update_data_layer_error)?;
        Ok(())
    }

    async fn delete_lesson(&self, id: &LessonId) -> Result<(), DataLayerError> {
        let result = lesson::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotFound);
        }
        Ok(())
    }
}
