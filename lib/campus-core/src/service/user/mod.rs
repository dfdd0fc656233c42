use std::sync::Arc;

use crate::repository::student_repository::StudentRepository;
use crate::repository::teacher_repository::TeacherRepository;
use crate::repository::user_repository::UserRepository;

pub mod dto;
pub mod service;

#[derive(Clone)]
pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
    teacher_repository: Arc<dyn TeacherRepository>,
    student_repository: Arc<dyn StudentRepository>,
}

impl UserService {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        teacher_repository: Arc<dyn TeacherRepository>,
        student_repository: Arc<dyn StudentRepository>,
    ) -> Self {
        Self {
            user_repository,
            teacher_repository,
            student_repository,
        }
    }
}

#[cfg(test)]
mod test;
