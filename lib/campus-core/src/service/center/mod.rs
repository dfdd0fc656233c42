use std::sync::Arc;

use crate::repository::branch_repository::BranchRepository;
use crate::repository::center_repository::CenterRepository;
use crate::repository::group_repository::GroupRepository;
use crate::repository::student_repository::StudentRepository;
use crate::repository::subject_repository::SubjectRepository;
use crate::repository::teacher_repository::TeacherRepository;

pub mod dto;
pub mod service;

#[derive(Clone)]
pub struct CenterService {
    center_repository: Arc<dyn CenterRepository>,
    subject_repository: Arc<dyn SubjectRepository>,
    branch_repository: Arc<dyn BranchRepository>,
    group_repository: Arc<dyn GroupRepository>,
    teacher_repository: Arc<dyn TeacherRepository>,
    student_repository: Arc<dyn StudentRepository>,
}

impl CenterService {
    pub fn new(
        center_repository: Arc<dyn CenterRepository>,
        subject_repository: Arc<dyn SubjectRepository>,
        branch_repository: Arc<dyn BranchRepository>,
        group_repository: Arc<dyn GroupRepository>,
        teacher_repository: Arc<dyn TeacherRepository>,
        student_repository: Arc<dyn StudentRepository>,
    ) -> Self {
        Self {
            center_repository,
            subject_repository,
            branch_repository,
            group_repository,
            teacher_repository,
            student_repository,
        }
    }
}

#[cfg(test)]
mod test;
