use shared_types::{AssignmentId, ExamId, ExamResultId, SubmissionId};
use time::OffsetDateTime;
use uuid::Uuid;

use super::CourseworkService;
use super::dto::{
    CreateAssignmentRequest, CreateExamRequest, CreateExamResultRequest, CreateSubmissionRequest,
    GradeSubmissionRequest,
};
use crate::model::assignment::{
    Assignment, AssignmentListQuery, AssignmentStatus, AssignmentSubmission, SubmissionListQuery,
    UpdateAssignmentRequest,
};
use crate::model::common::GetListResponse;
use crate::model::exam::{Exam, ExamListQuery, ExamResult, ExamResultListQuery, UpdateExamRequest};
use crate::model::scope::{Principal, Resource, scope_for};
use crate::model::user::Role;
use crate::repository::error::DataLayerError;
use crate::service::error::{
    EntityAlreadyExistsError, EntityNotFoundError, ServiceError, ValidationError,
};

impl CourseworkService {
    pub async fn create_assignment(
        &self,
        principal: &Principal,
        request: CreateAssignmentRequest,
    ) -> Result<AssignmentId, ServiceError> {
        let teacher_id = request
            .teacher_id
            .or_else(|| principal.teacher_id())
            .ok_or(ValidationError::TeacherRequired)?;

        let group_scope = scope_for(principal, Resource::Group);
        self.group_repository
            .get_group(&request.group_id, &group_scope)
            .await?
            .ok_or(EntityNotFoundError::Group(request.group_id))?;

        let now = OffsetDateTime::now_utc();
        let assignment = Assignment {
            id: Uuid::new_v4().into(),
            created_date: now,
            last_modified: now,
            group_id: request.group_id,
            teacher_id,
            title: request.title,
            description: request.description,
            file_path: request.file_path,
            due_date: request.due_date,
            status: AssignmentStatus::Assigned,
        };
        let id = self
            .assignment_repository
            .create_assignment(assignment)
            .await?;
        Ok(id)
    }

    pub async fn get_assignment(
        &self,
        principal: &Principal,
        id: &AssignmentId,
    ) -> Result<Assignment, ServiceError> {
        let scope = scope_for(principal, Resource::Assignment);
        self.assignment_repository
            .get_assignment(id, &scope)
            .await?
            .ok_or_else(|| EntityNotFoundError::Assignment(*id).into())
    }

    pub async fn get_assignment_list(
        &self,
        principal: &Principal,
        query: AssignmentListQuery,
    ) -> Result<GetListResponse<Assignment>, ServiceError> {
        let scope = scope_for(principal, Resource::Assignment);
        Ok(self
            .assignment_repository
            .get_assignment_list(query, &scope)
            .await?)
    }

    pub async fn update_assignment(
        &self,
        principal: &Principal,
        request: UpdateAssignmentRequest,
    ) -> Result<(), ServiceError> {
        self.get_assignment(principal, &request.id).await?;
        self.assignment_repository
            .update_assignment(request)
            .await?;
        Ok(())
    }

    pub async fn create_submission(
        &self,
        principal: &Principal,
        request: CreateSubmissionRequest,
    ) -> Result<SubmissionId, ServiceError> {
        let student_id = match principal.role() {
            // students always submit for themselves
            Some(Role::Student) => principal
                .student_id()
                .ok_or(ValidationError::StudentRequired)?,
            _ => request
                .student_id
                .ok_or(ValidationError::StudentRequired)?,
        };

        let assignment = self.get_assignment(principal, &request.assignment_id).await?;

        let submission = AssignmentSubmission {
            id: Uuid::new_v4().into(),
            assignment_id: assignment.id,
            student_id,
            submission_file_path: request.submission_file_path,
            submitted_at: OffsetDateTime::now_utc(),
            grade: None,
            feedback: String::new(),
            graded_at: None,
        };
        match self.submission_repository.create_submission(submission).await {
            Ok(id) => {
                self.assignment_repository
                    .update_assignment(UpdateAssignmentRequest {
                        id: assignment.id,
                        status: Some(AssignmentStatus::Submitted),
                        ..Default::default()
                    })
                    .await?;
                Ok(id)
            }
            Err(DataLayerError::AlreadyExists) => Err(EntityAlreadyExistsError::Submission {
                assignment: assignment.id,
                student: student_id,
            }
            .into()),
            Err(error) => Err(error.into()),
        }
    }

    pub async fn get_submission(
        &self,
        principal: &Principal,
        id: &SubmissionId,
    ) -> Result<AssignmentSubmission, ServiceError> {
        let scope = scope_for(principal, Resource::Submission);
        self.submission_repository
            .get_submission(id, &scope)
            .await?
            .ok_or_else(|| EntityNotFoundError::Submission(*id).into())
    }

    pub async fn get_submission_list(
        &self,
        principal: &Principal,
        query: SubmissionListQuery,
    ) -> Result<GetListResponse<AssignmentSubmission>, ServiceError> {
        let scope = scope_for(principal, Resource::Submission);
        Ok(self
            .submission_repository
            .get_submission_list(query, &scope)
            .await?)
    }

    pub async fn grade_submission(
        &self,
        principal: &Principal,
        id: &SubmissionId,
        request: GradeSubmissionRequest,
    ) -> Result<(), ServiceError> {
        if matches!(principal.role(), Some(Role::Student) | None) {
            return Err(ValidationError::Forbidden.into());
        }
        let submission = self.get_submission(principal, id).await?;

        self.submission_repository
            .set_grade(
                id,
                request.grade,
                request.feedback,
                OffsetDateTime::now_utc(),
            )
            .await?;
        self.assignment_repository
            .update_assignment(UpdateAssignmentRequest {
                id: submission.assignment_id,
                status: Some(AssignmentStatus::Graded),
                ..Default::default()
            })
            .await?;
        Ok(())
    }

    pub async fn create_exam(
        &self,
        principal: &Principal,
        request: CreateExamRequest,
    ) -> Result<ExamId, ServiceError> {
        let teacher_id = request
            .teacher_id
            .or_else(|| principal.teacher_id())
            .ok_or(ValidationError::TeacherRequired)?;

        let group_scope = scope_for(principal, Resource::Group);
        self.group_repository
            .get_group(&request.group_id, &group_scope)
            .await?
            .ok_or(EntityNotFoundError::Group(request.group_id))?;

        let exam = Exam {
            id: Uuid::new_v4().into(),
            created_date: OffsetDateTime::now_utc(),
            group_id: request.group_id,
            teacher_id,
            title: request.title,
            description: request.description,
            exam_date: request.exam_date,
            start_time: request.start_time,
            end_time: request.end_time,
            total_points: request.total_points,
            passing_score: request.passing_score,
            results_published: false,
        };
        let id = self.exam_repository.create_exam(exam).await?;
        Ok(id)
    }

    pub async fn get_exam(
        &self,
        principal: &Principal,
        id: &ExamId,
    ) -> Result<Exam, ServiceError> {
        let scope = scope_for(principal, Resource::Exam);
        self.exam_repository
            .get_exam(id, &scope)
            .await?
            .ok_or_else(|| EntityNotFoundError::Exam(*id).into())
    }

    pub async fn get_exam_list(
        &self,
        principal: &Principal,
        query: ExamListQuery,
    ) -> Result<GetListResponse<Exam>, ServiceError> {
        let scope = scope_for(principal, Resource::Exam);
        Ok(self.exam_repository.get_exam_list(query, &scope).await?)
    }

    pub async fn update_exam(
        &self,
        principal: &Principal,
        request: UpdateExamRequest,
    ) -> Result<(), ServiceError> {
        self.get_exam(principal, &request.id).await?;
        self.exam_repository.update_exam(request).await?;
        Ok(())
    }

    /// Makes the exam's results visible to students. Idempotent.
    pub async fn publish_exam_results(
        &self,
        principal: &Principal,
        id: &ExamId,
    ) -> Result<(), ServiceError> {
        if matches!(principal.role(), Some(Role::Student) | None) {
            return Err(ValidationError::Forbidden.into());
        }
        let exam = self.get_exam(principal, id).await?;
        if exam.results_published {
            return Ok(());
        }
        self.exam_repository.set_results_published(id, true).await?;
        Ok(())
    }

    pub async fn create_exam_result(
        &self,
        principal: &Principal,
        request: CreateExamResultRequest,
    ) -> Result<ExamResultId, ServiceError> {
        let exam = self.get_exam(principal, &request.exam_id).await?;
        if request.score > exam.total_points {
            return Err(ValidationError::ScoreExceedsTotal {
                score: request.score,
                total: exam.total_points,
            }
            .into());
        }

        let student_scope = scope_for(principal, Resource::Student);
        self.student_repository
            .get_student(&request.student_id, &student_scope)
            .await?
            .ok_or(EntityNotFoundError::Student(request.student_id))?;

        let result = ExamResult {
            id: Uuid::new_v4().into(),
            exam_id: exam.id,
            student_id: request.student_id,
            score: request.score,
            grade: request.grade,
            answer_file_path: request.answer_file_path,
            submitted_at: OffsetDateTime::now_utc(),
        };
        match self.exam_result_repository.create_exam_result(result).await {
            Ok(id) => Ok(id),
            Err(DataLayerError::AlreadyExists) => Err(EntityAlreadyExistsError::ExamResult {
                exam: exam.id,
                student: request.student_id,
            }
            .into()),
            Err(error) => Err(error.into()),
        }
    }

    pub async fn get_exam_result(
        &self,
        principal: &Principal,
        id: &ExamResultId,
    ) -> Result<ExamResult, ServiceError> {
        let scope = scope_for(principal, Resource::ExamResult);
        self.exam_result_repository
            .get_exam_result(id, &scope)
            .await?
            .ok_or_else(|| EntityNotFoundError::ExamResult(*id).into())
    }

    pub async fn get_exam_result_list(
        &self,
        principal: &Principal,
        query: ExamResultListQuery,
    ) -> Result<GetListResponse<ExamResult>, ServiceError> {
        let scope = scope_for(principal, Resource::ExamResult);
        Ok(self
            .exam_result_repository
            .get_exam_result_list(query, &scope)
            .await?)
    }
}
