use std::sync::Arc;

use crate::repository::assignment_repository::AssignmentRepository;
use crate::repository::exam_repository::ExamRepository;
use crate::repository::exam_result_repository::ExamResultRepository;
use crate::repository::group_repository::GroupRepository;
use crate::repository::student_repository::StudentRepository;
use crate::repository::submission_repository::SubmissionRepository;

pub mod dto;
pub mod service;

#[derive(Clone)]
pub struct CourseworkService {
    assignment_repository: Arc<dyn AssignmentRepository>,
    submission_repository: Arc<dyn SubmissionRepository>,
    exam_repository: Arc<dyn ExamRepository>,
    exam_result_repository: Arc<dyn ExamResultRepository>,
    group_repository: Arc<dyn GroupRepository>,
    student_repository: Arc<dyn StudentRepository>,
}

impl CourseworkService {
    pub fn new(
        assignment_repository: Arc<dyn AssignmentRepository>,
        submission_repository: Arc<dyn SubmissionRepository>,
        exam_repository: Arc<dyn ExamRepository>,
        exam_result_repository: Arc<dyn ExamResultRepository>,
        group_repository: Arc<dyn GroupRepository>,
        student_repository: Arc<dyn StudentRepository>,
    ) -> Self {
        Self {
            assignment_repository,
            submission_repository,
            exam_repository,
            exam_result_repository,
            group_repository,
            student_repository,
        }
    }
}

#[cfg(test)]
mod test;
