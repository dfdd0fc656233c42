use std::sync::Arc;

use crate::repository::group_repository::GroupRepository;
use crate::repository::payment_repository::PaymentRepository;
use crate::repository::student_repository::StudentRepository;

pub mod dto;
pub mod service;

#[derive(Clone)]
pub struct PaymentService {
    payment_repository: Arc<dyn PaymentRepository>,
    student_repository: Arc<dyn StudentRepository>,
    group_repository: Arc<dyn GroupRepository>,
}

impl PaymentService {
    pub fn new(
        payment_repository: Arc<dyn PaymentRepository>,
        student_repository: Arc<dyn StudentRepository>,
        group_repository: Arc<dyn GroupRepository>,
    ) -> Self {
        Self {
            payment_repository,
            student_repository,
            group_repository,
        }
    }
}
