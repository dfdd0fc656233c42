use autometrics::autometrics;
use campus_core::model::attendance::{
    Attendance, AttendanceCounts, AttendanceFilter, AttendanceListQuery, AttendanceStatus,
};
use campus_core::model::common::GetListResponse;
use campus_core::model::scope::VisibilityScope;
use campus_core::repository::attendance_repository::AttendanceRepository;
use campus_core::repository::error::DataLayerError;
use one_dto_mapper::convert_inner;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect, Set};
use shared_types::{AttendanceId, LessonId, StudentId, TeacherId};
use time::OffsetDateTime;
use uuid::Uuid;

use super::AttendanceProvider;
use crate::entity::attendance;
use crate::list_query::{IntoFilterCondition, SelectWithListQuery, total_pages};
use crate::mapper::to_data_layer_error;
use crate::scope;

#[autometrics]
#[async_trait::async_trait]
impl AttendanceRepository for AttendanceProvider {
    async fn mark_attendance(
        &self,
        lesson_id: LessonId,
        student_id: StudentId,
        status: AttendanceStatus,
        marked_by_id: Option<TeacherId>,
    ) -> Result<AttendanceId, DataLayerError> {
        let now = OffsetDateTime::now_utc();

        // single-statement upsert on the unique (lesson, student) index, so
        // concurrent marks for the same pair cannot race a find-then-insert
        attendance::Entity::insert(attendance::ActiveModel {
            id: Set(AttendanceId::from(Uuid::new_v4())),
            lesson_id: Set(lesson_id),
            student_id: Set(student_id),
            status: Set(status.into()),
            marked_by_id: Set(marked_by_id),
            notes: Set(String::new()),
            marked_at: Set(now),
        })
        .on_conflict(
            OnConflict::columns([attendance::Column::LessonId, attendance::Column::StudentId])
                .update_columns([
                    attendance::Column::Status,
                    attendance::Column::MarkedById,
                    attendance::Column::MarkedAt,
                ])
                .to_owned(),
        )
        .exec(&self.db)
        .await
        .map_err(to_data_layer_error)?;

        // a conflicting insert keeps the original row id
        let row = attendance::Entity::find()
            .filter(attendance::Column::LessonId.eq(lesson_id))
            .filter(attendance::Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?
            .ok_or(DataLayerError::RecordNotFound)?;

        Ok(row.id)
    }

    async fn get_attendance(
        &self,
        id: &AttendanceId,
        scope: &VisibilityScope,
    ) -> Result<Option<Attendance>, DataLayerError> {
        let attendance = attendance::Entity::find_by_id(id)
            .filter(scope::attendance_condition(scope))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(attendance))
    }

    async fn get_attendance_list(
        &self,
        query: AttendanceListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Attendance>, DataLayerError> {
        let filtered = attendance::Entity::find()
            .filter(scope::attendance_condition(scope))
            .with_filtering(&query);

        let total_items = filtered
            .clone()
            .count(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let rows: Vec<attendance::Model> = filtered
            .with_sorting_and_pagination(&query)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(GetListResponse {
            total_pages: total_pages(total_items, query.pagination.as_ref()),
            total_items,
            values: convert_inner(rows),
        })
    }

    async fn get_attendance_counts(
        &self,
        filter: AttendanceFilter,
        scope: &VisibilityScope,
    ) -> Result<AttendanceCounts, DataLayerError> {
        let rows: Vec<(attendance::AttendanceStatus, i64)> = attendance::Entity::find()
            .select_only()
            .column(attendance::Column::Status)
            .column_as(attendance::Column::Id.count(), "count")
            .filter(scope::attendance_condition(scope))
            .filter(filter.get_condition())
            .group_by(attendance::Column::Status)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let mut counts = AttendanceCounts::default();
        for (status, count) in rows {
            let count = count as u64;
            counts.total += count;
            match status {
                attendance::AttendanceStatus::Present => counts.present = count,
                attendance::AttendanceStatus::Absent => counts.absent = count,
                attendance::AttendanceStatus::Late => counts.late = count,
                attendance::AttendanceStatus::Excused => counts.excused = count,
            }
        }
        Ok(counts)
    }

    async fn delete_attendance(&self, id: &AttendanceId) -> Result<(), DataLayerError> {
        let result = attendance::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotFound);
        }
        Ok(())
    }
}
