use shared_types::{AttendanceId, LessonId, StudentId, TeacherId};

use super::error::DataLayerError;
use crate::model::attendance::{
    Attendance, AttendanceCounts, AttendanceFilter, AttendanceListQuery, AttendanceStatus,
};
use crate::model::common::GetListResponse;
use crate::model::scope::VisibilityScope;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Create-or-update on the (lesson, student) natural key. A second call
    /// for the same pair overwrites status, marker and timestamp and keeps
    /// the row id.
    async fn mark_attendance(
        &self,
        lesson_id: LessonId,
        student_id: StudentId,
        status: AttendanceStatus,
        marked_by_id: Option<TeacherId>,
    ) -> Result<AttendanceId, DataLayerError>;

    async fn get_attendance(
        &self,
        id: &AttendanceId,
        scope: &VisibilityScope,
    ) -> Result<Option<Attendance>, DataLayerError>;

    async fn get_attendance_list(
        &self,
        query: AttendanceListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Attendance>, DataLayerError>;

    async fn get_attendance_counts(
        &self,
        filter: AttendanceFilter,
        scope: &VisibilityScope,
    ) -> Result<AttendanceCounts, DataLayerError>;

    async fn delete_attendance(&self, id: &AttendanceId) -> Result<(), DataLayerError>;
}
