use std::sync::Arc;

use crate::repository::attendance_repository::AttendanceRepository;
use crate::repository::lesson_repository::LessonRepository;
use crate::repository::student_repository::StudentRepository;

pub mod dto;
pub mod service;

#[derive(Clone)]
pub struct AttendanceService {
    attendance_repository: Arc<dyn AttendanceRepository>,
    lesson_repository: Arc<dyn LessonRepository>,
    student_repository: Arc<dyn StudentRepository>,
}

impl AttendanceService {
    pub fn new(
        attendance_repository: Arc<dyn AttendanceRepository>,
        lesson_repository: Arc<dyn LessonRepository>,
        student_repository: Arc<dyn StudentRepository>,
    ) -> Self {
        Self {
            attendance_repository,
            lesson_repository,
            student_repository,
        }
    }
}

#[cfg(test)]
mod test;
