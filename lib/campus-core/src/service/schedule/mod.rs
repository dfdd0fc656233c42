use std::sync::Arc;

use crate::repository::attendance_repository::AttendanceRepository;
use crate::repository::branch_repository::BranchRepository;
use crate::repository::group_repository::GroupRepository;
use crate::repository::lesson_repository::LessonRepository;
use crate::repository::payment_repository::PaymentRepository;
use crate::repository::student_repository::StudentRepository;

pub mod dto;
pub mod service;

#[derive(Clone)]
pub struct ScheduleService {
    group_repository: Arc<dyn GroupRepository>,
    lesson_repository: Arc<dyn LessonRepository>,
    branch_repository: Arc<dyn BranchRepository>,
    student_repository: Arc<dyn StudentRepository>,
    attendance_repository: Arc<dyn AttendanceRepository>,
    payment_repository: Arc<dyn PaymentRepository>,
}

impl ScheduleService {
    pub fn new(
        group_repository: Arc<dyn GroupRepository>,
        lesson_repository: Arc<dyn LessonRepository>,
        branch_repository: Arc<dyn BranchRepository>,
        student_repository: Arc<dyn StudentRepository>,
        attendance_repository: Arc<dyn AttendanceRepository>,
        payment_repository: Arc<dyn PaymentRepository>,
    ) -> Self {
        Self {
            group_repository,
            lesson_repository,
            branch_repository,
            student_repository,
            attendance_repository,
            payment_repository,
        }
    }
}

#[cfg(test)]
mod test;
