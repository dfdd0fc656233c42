use shared_types::AttendanceId;
use tracing::debug;

use super::AttendanceService;
use super::dto::{BulkMarkRequest, BulkMarkResponse};
use crate::model::attendance::{Attendance, AttendanceListQuery};
use crate::model::common::GetListResponse;
use crate::model::scope::{Principal, Resource, scope_for};
use crate::service::error::{EntityNotFoundError, ServiceError};

impl AttendanceService {
    /// Marks attendance for a whole lesson in one call.
    ///
    /// Each entry lands on the unique (lesson, student) row: absent rows are
    /// created, existing ones are overwritten. Re-sending the same batch
    /// converges to the same rows. Unknown students are skipped, an unknown
    /// lesson fails the whole call.
    pub async fn bulk_mark(
        &self,
        principal: &Principal,
        request: BulkMarkRequest,
    ) -> Result<BulkMarkResponse, ServiceError> {
        let lesson_scope = scope_for(principal, Resource::Lesson);
        let lesson = self
            .lesson_repository
            .get_lesson(&request.lesson_id, &lesson_scope)
            .await?
            .ok_or(EntityNotFoundError::Lesson(request.lesson_id))?;

        let student_scope = scope_for(principal, Resource::Student);
        // only a teacher caller is recorded as the marker; staff marks stay anonymous
        let marked_by_id = principal.teacher_id();

        let mut marked_count = 0;
        for entry in request.entries {
            let student = self
                .student_repository
                .get_student(&entry.student_id, &student_scope)
                .await?;
            if student.is_none() {
                debug!(student_id = %entry.student_id, "skipping unknown student in bulk mark");
                continue;
            }

            self.attendance_repository
                .mark_attendance(lesson.id, entry.student_id, entry.status, marked_by_id)
                .await?;
            marked_count += 1;
        }

        Ok(BulkMarkResponse { marked_count })
    }

    pub async fn get_attendance(
        &self,
        principal: &Principal,
        id: &AttendanceId,
    ) -> Result<Attendance, ServiceError> {
        let scope = scope_for(principal, Resource::Attendance);
        self.attendance_repository
            .get_attendance(id, &scope)
            .await?
            .ok_or_else(|| EntityNotFoundError::Attendance(*id).into())
    }

    pub async fn get_attendance_list(
        &self,
        principal: &Principal,
        query: AttendanceListQuery,
    ) -> Result<GetListResponse<Attendance>, ServiceError> {
        let scope = scope_for(principal, Resource::Attendance);
        Ok(self
            .attendance_repository
            .get_attendance_list(query, &scope)
            .await?)
    }
}
