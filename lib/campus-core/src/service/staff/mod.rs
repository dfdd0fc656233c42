use std::sync::Arc;

use crate::repository::assignment_repository::AssignmentRepository;
use crate::repository::attendance_repository::AttendanceRepository;
use crate::repository::branch_repository::BranchRepository;
use crate::repository::exam_repository::ExamRepository;
use crate::repository::lesson_repository::LessonRepository;
use crate::repository::teacher_repository::TeacherRepository;

pub mod dto;
pub mod service;

#[derive(Clone)]
pub struct StaffService {
    teacher_repository: Arc<dyn TeacherRepository>,
    branch_repository: Arc<dyn BranchRepository>,
    lesson_repository: Arc<dyn LessonRepository>,
    attendance_repository: Arc<dyn AttendanceRepository>,
    assignment_repository: Arc<dyn AssignmentRepository>,
    exam_repository: Arc<dyn ExamRepository>,
}

impl StaffService {
    pub fn new(
        teacher_repository: Arc<dyn TeacherRepository>,
        branch_repository: Arc<dyn BranchRepository>,
        lesson_repository: Arc<dyn LessonRepository>,
        attendance_repository: Arc<dyn AttendanceRepository>,
        assignment_repository: Arc<dyn AssignmentRepository>,
        exam_repository: Arc<dyn ExamRepository>,
    ) -> Self {
        Self {
            teacher_repository,
            branch_repository,
            lesson_repository,
            attendance_repository,
            assignment_repository,
            exam_repository,
        }
    }
}

#[cfg(test)]
mod test;
