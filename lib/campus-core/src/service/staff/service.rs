use shared_types::TeacherId;
use time::OffsetDateTime;
use uuid::Uuid;

use super::StaffService;
use super::dto::{CreateTeacherRequest, TeacherPerformanceResponse};
use crate::model::assignment::{AssignmentFilter, AssignmentListQuery};
use crate::model::attendance::AttendanceFilter;
use crate::model::common::{GetListResponse, ListPagination};
use crate::model::exam::{ExamFilter, ExamListQuery};
use crate::model::lesson::{Lesson, LessonFilter, LessonListQuery};
use crate::model::scope::{Principal, Resource, scope_for};
use crate::model::teacher::{PersonStatus, Teacher, TeacherListQuery, UpdateTeacherRequest};
use crate::service::error::{EntityNotFoundError, ServiceError, ValidationError};

impl StaffService {
    pub async fn create_teacher(
        &self,
        principal: &Principal,
        request: CreateTeacherRequest,
    ) -> Result<TeacherId, ServiceError> {
        self.ensure_staff(principal)?;

        // the branch must be inside the caller's tenant
        let branch_scope = scope_for(principal, Resource::Branch);
        self.branch_repository
            .get_branch(&request.branch_id, &branch_scope)
            .await?
            .ok_or(EntityNotFoundError::Branch(request.branch_id))?;

        let now = OffsetDateTime::now_utc();
        let teacher = Teacher {
            id: Uuid::new_v4().into(),
            created_date: now,
            last_modified: now,
            user_id: request.user_id,
            branch_id: request.branch_id,
            status: PersonStatus::Active,
            phone: request.phone,
            date_of_birth: request.date_of_birth,
            specialization: request.specialization,
            qualification: request.qualification,
            performance_rating: 0.0,
            hire_date: request.hire_date,
            hourly_rate: request.hourly_rate,
            address: request.address,
            passport_number: request.passport_number,
        };
        let id = self.teacher_repository.create_teacher(teacher).await?;
        Ok(id)
    }

    pub async fn get_teacher(
        &self,
        principal: &Principal,
        id: &TeacherId,
    ) -> Result<Teacher, ServiceError> {
        let scope = scope_for(principal, Resource::Teacher);
        self.teacher_repository
            .get_teacher(id, &scope)
            .await?
            .ok_or_else(|| EntityNotFoundError::Teacher(*id).into())
    }

    pub async fn get_teacher_list(
        &self,
        principal: &Principal,
        query: TeacherListQuery,
    ) -> Result<GetListResponse<Teacher>, ServiceError> {
        let scope = scope_for(principal, Resource::Teacher);
        Ok(self
            .teacher_repository
            .get_teacher_list(query, &scope)
            .await?)
    }

    pub async fn update_teacher(
        &self,
        principal: &Principal,
        request: UpdateTeacherRequest,
    ) -> Result<(), ServiceError> {
        self.ensure_staff(principal)?;
        if let Some(rating) = request.performance_rating {
            validate_rating(rating)?;
        }
        self.get_teacher(principal, &request.id).await?;
        self.teacher_repository.update_teacher(request).await?;
        Ok(())
    }

    /// Idempotent.
    pub async fn block_teacher(
        &self,
        principal: &Principal,
        id: &TeacherId,
    ) -> Result<(), ServiceError> {
        self.ensure_staff(principal)?;
        let teacher = self.get_teacher(principal, id).await?;
        if teacher.status == PersonStatus::Blocked {
            return Ok(());
        }
        self.teacher_repository
            .update_teacher(UpdateTeacherRequest {
                id: *id,
                status: Some(PersonStatus::Blocked),
                ..Default::default()
            })
            .await?;
        Ok(())
    }

    pub async fn rate_teacher(
        &self,
        principal: &Principal,
        id: &TeacherId,
        rating: f64,
    ) -> Result<(), ServiceError> {
        self.ensure_staff(principal)?;
        validate_rating(rating)?;
        self.get_teacher(principal, id).await?;
        self.teacher_repository
            .update_teacher(UpdateTeacherRequest {
                id: *id,
                performance_rating: Some(rating),
                ..Default::default()
            })
            .await?;
        Ok(())
    }

    /// All lessons the teacher holds, ordered by date and start time, further
    /// narrowed to what the caller may see.
    pub async fn get_teacher_schedule(
        &self,
        principal: &Principal,
        id: &TeacherId,
    ) -> Result<GetListResponse<Lesson>, ServiceError> {
        self.get_teacher(principal, id).await?;

        let scope = scope_for(principal, Resource::Lesson);
        let lessons = self.lesson_repository.get_teacher_schedule(id, &scope).await?;

        Ok(GetListResponse {
            total_pages: u64::from(!lessons.is_empty()),
            total_items: lessons.len() as u64,
            values: lessons,
        })
    }

    pub async fn get_teacher_performance(
        &self,
        principal: &Principal,
        id: &TeacherId,
    ) -> Result<TeacherPerformanceResponse, ServiceError> {
        let teacher = self.get_teacher(principal, id).await?;

        // only the totals are of interest
        let probe = ListPagination {
            page: 0,
            page_size: 1,
        };

        let lessons = self
            .lesson_repository
            .get_lesson_list(
                LessonListQuery {
                    pagination: Some(probe),
                    filtering: Some(LessonFilter {
                        teacher_id: Some(*id),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                &scope_for(principal, Resource::Lesson),
            )
            .await?
            .total_items;
        let attendances_marked = self
            .attendance_repository
            .get_attendance_counts(
                AttendanceFilter {
                    marked_by_id: Some(*id),
                    ..Default::default()
                },
                &scope_for(principal, Resource::Attendance),
            )
            .await?
            .total;
        let assignments = self
            .assignment_repository
            .get_assignment_list(
                AssignmentListQuery {
                    pagination: Some(probe),
                    filtering: Some(AssignmentFilter {
                        teacher_id: Some(*id),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                &scope_for(principal, Resource::Assignment),
            )
            .await?
            .total_items;
        let exams = self
            .exam_repository
            .get_exam_list(
                ExamListQuery {
                    pagination: Some(probe),
                    filtering: Some(ExamFilter {
                        teacher_id: Some(*id),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                &scope_for(principal, Resource::Exam),
            )
            .await?
            .total_items;

        Ok(TeacherPerformanceResponse {
            lessons,
            attendances_marked,
            assignments,
            exams,
            performance_rating: teacher.performance_rating,
        })
    }

    pub async fn delete_teacher(
        &self,
        principal: &Principal,
        id: &TeacherId,
    ) -> Result<(), ServiceError> {
        self.ensure_staff(principal)?;
        self.get_teacher(principal, id).await?;
        self.teacher_repository.delete_teacher(id).await?;
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

fn validate_rating(rating: f64) -> Result<(), ServiceError> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(ValidationError::RatingOutOfRange(rating).into());
    }
    Ok(())
}
