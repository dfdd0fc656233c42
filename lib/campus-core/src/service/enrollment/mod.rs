use std::sync::Arc;

use crate::repository::attendance_repository::AttendanceRepository;
use crate::repository::branch_repository::BranchRepository;
use crate::repository::contract_repository::ContractRepository;
use crate::repository::group_repository::GroupRepository;
use crate::repository::lead_repository::LeadRepository;
use crate::repository::payment_repository::PaymentRepository;
use crate::repository::student_repository::StudentRepository;

pub mod dto;
pub mod service;

#[derive(Clone)]
pub struct EnrollmentService {
    student_repository: Arc<dyn StudentRepository>,
    lead_repository: Arc<dyn LeadRepository>,
    contract_repository: Arc<dyn ContractRepository>,
    group_repository: Arc<dyn GroupRepository>,
    branch_repository: Arc<dyn BranchRepository>,
    attendance_repository: Arc<dyn AttendanceRepository>,
    payment_repository: Arc<dyn PaymentRepository>,
}

impl EnrollmentService {
    pub fn new(
        student_repository: Arc<dyn StudentRepository>,
        lead_repository: Arc<dyn LeadRepository>,
        contract_repository: Arc<dyn ContractRepository>,
        group_repository: Arc<dyn GroupRepository>,
        branch_repository: Arc<dyn BranchRepository>,
        attendance_repository: Arc<dyn AttendanceRepository>,
        payment_repository: Arc<dyn PaymentRepository>,
    ) -> Self {
        Self {
            student_repository,
            lead_repository,
            contract_repository,
            group_repository,
            branch_repository,
            attendance_repository,
            payment_repository,
        }
    }
}

#[cfg(test)]
mod test;
