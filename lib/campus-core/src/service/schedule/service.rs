use shared_types::{GroupId, LessonId};
use time::OffsetDateTime;
use uuid::Uuid;

use super::ScheduleService;
use super::dto::{
    CreateGroupRequest, CreateLessonRequest, GroupAttendanceReportResponse,
    GroupStatisticsResponse, OnlineLinkResponse,
};
use crate::model::attendance::AttendanceFilter;
use crate::model::common::{GetListResponse, ListPagination};
use crate::model::group::{Group, GroupListQuery, GroupStatus, UpdateGroupRequest};
use crate::model::lesson::{Lesson, LessonFilter, LessonListQuery, UpdateLessonRequest};
use crate::model::payment::PaymentFilter;
use crate::model::scope::{Principal, Resource, scope_for};
use crate::model::student::{StudentFilter, StudentListQuery};
use crate::service::error::{
    BusinessLogicError, EntityNotFoundError, ServiceError, ValidationError,
};

impl ScheduleService {
    pub async fn create_group(
        &self,
        principal: &Principal,
        request: CreateGroupRequest,
    ) -> Result<GroupId, ServiceError> {
        self.ensure_staff(principal)?;
        if request.capacity == 0 {
            return Err(ValidationError::ZeroCapacity.into());
        }
        if request.start_date > request.end_date {
            return Err(ValidationError::DatesReversed {
                start: request.start_date.to_string(),
                end: request.end_date.to_string(),
            }
            .into());
        }

        // tenant is inherited from the branch, which must be visible
        let branch_scope = scope_for(principal, Resource::Branch);
        let branch = self
            .branch_repository
            .get_branch(&request.branch_id, &branch_scope)
            .await?
            .ok_or(EntityNotFoundError::Branch(request.branch_id))?;

        let now = OffsetDateTime::now_utc();
        let group = Group {
            id: Uuid::new_v4().into(),
            created_date: now,
            last_modified: now,
            center_id: branch.center_id,
            branch_id: branch.id,
            subject_id: request.subject_id,
            teacher_id: request.teacher_id,
            room_id: request.room_id,
            name: request.name,
            capacity: request.capacity,
            status: GroupStatus::Active,
            start_date: request.start_date,
            end_date: request.end_date,
        };
        let id = self.group_repository.create_group(group).await?;
        Ok(id)
    }

    pub async fn get_group(
        &self,
        principal: &Principal,
        id: &GroupId,
    ) -> Result<Group, ServiceError> {
        let scope = scope_for(principal, Resource::Group);
        self.group_repository
            .get_group(id, &scope)
            .await?
            .ok_or_else(|| EntityNotFoundError::Group(*id).into())
    }

    pub async fn get_group_list(
        &self,
        principal: &Principal,
        query: GroupListQuery,
    ) -> Result<GetListResponse<Group>, ServiceError> {
        let scope = scope_for(principal, Resource::Group);
        Ok(self.group_repository.get_group_list(query, &scope).await?)
    }

    pub async fn update_group(
        &self,
        principal: &Principal,
        request: UpdateGroupRequest,
    ) -> Result<(), ServiceError> {
        self.ensure_staff(principal)?;
        if request.capacity == Some(0) {
            return Err(ValidationError::ZeroCapacity.into());
        }
        self.get_group(principal, &request.id).await?;
        self.group_repository.update_group(request).await?;
        Ok(())
    }

    /// Headline numbers for one group: headcount, lesson count, the share of
    /// present marks and the payment volume.
    pub async fn get_group_statistics(
        &self,
        principal: &Principal,
        id: &GroupId,
    ) -> Result<GroupStatisticsResponse, ServiceError> {
        self.get_group(principal, id).await?;

        // only the totals are of interest
        let probe = ListPagination {
            page: 0,
            page_size: 1,
        };

        let students = self
            .student_repository
            .get_student_list(
                StudentListQuery {
                    pagination: Some(probe),
                    filtering: Some(StudentFilter {
                        group_id: Some(*id),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                &scope_for(principal, Resource::Student),
            )
            .await?
            .total_items;
        let lessons = self
            .lesson_repository
            .get_lesson_list(
                LessonListQuery {
                    pagination: Some(probe),
                    filtering: Some(LessonFilter {
                        group_id: Some(*id),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                &scope_for(principal, Resource::Lesson),
            )
            .await?
            .total_items;

        let attendance = self
            .attendance_repository
            .get_attendance_counts(
                AttendanceFilter {
                    group_id: Some(*id),
                    ..Default::default()
                },
                &scope_for(principal, Resource::Attendance),
            )
            .await?;
        let average_attendance = if attendance.total == 0 {
            0.0
        } else {
            attendance.present as f64 * 100.0 / attendance.total as f64
        };

        let payments = self
            .payment_repository
            .get_payment_totals(
                PaymentFilter {
                    group_id: Some(*id),
                    ..Default::default()
                },
                &scope_for(principal, Resource::Payment),
            )
            .await?;

        Ok(GroupStatisticsResponse {
            students,
            lessons,
            average_attendance,
            payments_total: payments.amount,
            payments_count: payments.count,
        })
    }

    pub async fn get_group_attendance_report(
        &self,
        principal: &Principal,
        id: &GroupId,
    ) -> Result<GroupAttendanceReportResponse, ServiceError> {
        self.get_group(principal, id).await?;

        let total_lessons = self
            .lesson_repository
            .get_lesson_list(
                LessonListQuery {
                    pagination: Some(ListPagination {
                        page: 0,
                        page_size: 1,
                    }),
                    filtering: Some(LessonFilter {
                        group_id: Some(*id),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                &scope_for(principal, Resource::Lesson),
            )
            .await?
            .total_items;

        let counts = self
            .attendance_repository
            .get_attendance_counts(
                AttendanceFilter {
                    group_id: Some(*id),
                    ..Default::default()
                },
                &scope_for(principal, Resource::Attendance),
            )
            .await?;

        Ok(GroupAttendanceReportResponse {
            total_lessons,
            total_attendances: counts.total,
            present: counts.present,
            absent: counts.absent,
            late: counts.late,
        })
    }

    pub async fn create_lesson(
        &self,
        principal: &Principal,
        request: CreateLessonRequest,
    ) -> Result<LessonId, ServiceError> {
        let group = self.get_group(principal, &request.group_id).await?;
        if group.status == GroupStatus::Closed {
            return Err(BusinessLogicError::GroupClosed(group.id).into());
        }

        let now = OffsetDateTime::now_utc();
        let lesson = Lesson {
            id: Uuid::new_v4().into(),
            created_date: now,
            last_modified: now,
            group_id: group.id,
            teacher_id: request.teacher_id.or(group.teacher_id),
            room_id: request.room_id.or(group.room_id),
            date: request.date,
            start_time: request.start_time,
            end_time: request.end_time,
            duration: request.duration,
            online_link: String::new(),
            is_cancelled: false,
        };
        let id = self.lesson_repository.create_lesson(lesson).await?;
        Ok(id)
    }

    pub async fn get_lesson(
        &self,
        principal: &Principal,
        id: &LessonId,
    ) -> Result<Lesson, ServiceError> {
        let scope = scope_for(principal, Resource::Lesson);
        self.lesson_repository
            .get_lesson(id, &scope)
            .await?
            .ok_or_else(|| EntityNotFoundError::Lesson(*id).into())
    }

    pub async fn get_lesson_list(
        &self,
        principal: &Principal,
        query: LessonListQuery,
    ) -> Result<GetListResponse<Lesson>, ServiceError> {
        let scope = scope_for(principal, Resource::Lesson);
        Ok(self.lesson_repository.get_lesson_list(query, &scope).await?)
    }

    pub async fn update_lesson(
        &self,
        principal: &Principal,
        request: UpdateLessonRequest,
    ) -> Result<(), ServiceError> {
        self.get_lesson(principal, &request.id).await?;
        self.lesson_repository.update_lesson(request).await?;
        Ok(())
    }

    /// Idempotent; an already cancelled lesson stays cancelled.
    pub async fn cancel_lesson(
        &self,
        principal: &Principal,
        id: &LessonId,
    ) -> Result<(), ServiceError> {
        let lesson = self.get_lesson(principal, id).await?;
        if lesson.is_cancelled {
            return Ok(());
        }
        self.lesson_repository
            .update_lesson(UpdateLessonRequest {
                id: *id,
                is_cancelled: Some(true),
                ..Default::default()
            })
            .await?;
        Ok(())
    }

    /// Mints a fresh meeting link and stores it on the lesson.
    pub async fn generate_online_link(
        &self,
        principal: &Principal,
        id: &LessonId,
    ) -> Result<OnlineLinkResponse, ServiceError> {
        self.get_lesson(principal, id).await?;

        let token = Uuid::new_v4().simple().to_string();
        let online_link = format!("https://meet.example.com/{}", &token[..10]);
        self.lesson_repository
            .update_lesson(UpdateLessonRequest {
                id: *id,
                online_link: Some(online_link.clone()),
                ..Default::default()
            })
            .await?;
        Ok(OnlineLinkResponse { online_link })
    }

    pub async fn delete_lesson(
        &self,
        principal: &Principal,
        id: &LessonId,
    ) -> Result<(), ServiceError> {
        self.ensure_staff(principal)?;
        self.get_lesson(principal, id).await?;
        self.lesson_repository.delete_lesson(id).await?;
        Ok(())
    }

    fn ensure_staff(&self, principal: &Principal) -> Result<(), ServiceError> {
        if principal.is_super_admin() || principal.is_center_staff() {
            Ok(())
        } else {
            Err(ValidationError::Forbidden.into())
        }
    }
}
