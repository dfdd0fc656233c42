use shared_types::{ContractId, GroupId, LeadId, StudentId};
use time::OffsetDateTime;
use uuid::Uuid;

use super::EnrollmentService;
use super::dto::{
    ConvertLeadResponse, CreateContractRequest, CreateLeadRequest, CreateStudentRequest,
    LeadStatisticsResponse,
};
use crate::model::attendance::{AttendanceCounts, AttendanceFilter};
use crate::model::common::{GetListResponse, ListSorting, SortDirection};
use crate::model::contract::{Contract, ContractListQuery};
use crate::model::group::GroupStatus;
use crate::model::lead::{Lead, LeadListQuery, LeadStatus, UpdateLeadRequest};
use crate::model::payment::{
    Payment, PaymentFilter, PaymentListQuery, SortablePaymentColumn,
};
use crate::model::scope::{Principal, Resource, scope_for};
use crate::model::student::{Student, StudentListQuery, UpdateStudentRequest};
use crate::model::teacher::PersonStatus;
use crate::repository::error::DataLayerError;
use crate::service::error::{
    BusinessLogicError, EntityAlreadyExistsError, EntityNotFoundError, ServiceError,
    ValidationError,
};

impl EnrollmentService {
    pub async fn create_student(
        &self,
        principal: &Principal,
        request: CreateStudentRequest,
    ) -> Result<StudentId, ServiceError> {
        self.ensure_staff(principal)?;

        let branch_scope = scope_for(principal, Resource::Branch);
        self.branch_repository
            .get_branch(&request.branch_id, &branch_scope)
            .await?
            .ok_or(EntityNotFoundError::Branch(request.branch_id))?;

        let now = OffsetDateTime::now_utc();
        let student = Student {
            id: Uuid::new_v4().into(),
            created_date: now,
            last_modified: now,
            user_id: request.user_id,
            branch_id: request.branch_id,
            group_id: request.group_id,
            first_name: request.first_name,
            last_name: request.last_name,
            phone: request.phone,
            date_of_birth: request.date_of_birth,
            enrollment_date: request.enrollment_date,
            address: request.address,
            parent_name: request.parent_name,
            parent_phone: request.parent_phone,
            parent_email: request.parent_email,
            passport_number: request.passport_number,
            status: PersonStatus::Active,
        };
        let id = self.student_repository.create_student(student).await?;
        Ok(id)
    }

    pub async fn get_student(
        &self,
        principal: &Principal,
        id: &StudentId,
    ) -> Result<Student, ServiceError> {
        let scope = scope_for(principal, Resource::Student);
        self.student_repository
            .get_student(id, &scope)
            .await?
            .ok_or_else(|| EntityNotFoundError::Student(*id).into())
    }

    pub async fn get_student_list(
        &self,
        principal: &Principal,
        query: StudentListQuery,
    ) -> Result<GetListResponse<Student>, ServiceError> {
        let scope = scope_for(principal, Resource::Student);
        Ok(self
            .student_repository
            .get_student_list(query, &scope)
            .await?)
    }

    pub async fn update_student(
        &self,
        principal: &Principal,
        request: UpdateStudentRequest,
    ) -> Result<(), ServiceError> {
        self.ensure_staff(principal)?;
        self.get_student(principal, &request.id).await?;
        self.student_repository.update_student(request).await?;
        Ok(())
    }

    /// Idempotent.
    pub async fn block_student(
        &self,
        principal: &Principal,
        id: &StudentId,
    ) -> Result<(), ServiceError> {
        self.ensure_staff(principal)?;
        let student = self.get_student(principal, id).await?;
        if student.status == PersonStatus::Blocked {
            return Ok(());
        }
        self.student_repository
            .update_student(UpdateStudentRequest {
                id: *id,
                status: Some(PersonStatus::Blocked),
                ..Default::default()
            })
            .await?;
        Ok(())
    }

    /// Moves the student into `group_id`. The group must be visible to the
    /// caller and still open for enrollment.
    pub async fn assign_group(
        &self,
        principal: &Principal,
        student_id: &StudentId,
        group_id: &GroupId,
    ) -> Result<(), ServiceError> {
        self.ensure_staff(principal)?;
        self.get_student(principal, student_id).await?;

        let group_scope = scope_for(principal, Resource::Group);
        let group = self
            .group_repository
            .get_group(group_id, &group_scope)
            .await?
            .ok_or(EntityNotFoundError::Group(*group_id))?;
        if group.status == GroupStatus::Closed {
            return Err(BusinessLogicError::GroupClosed(group.id).into());
        }

        self.student_repository
            .update_student(UpdateStudentRequest {
                id: *student_id,
                group_id: Some(Some(*group_id)),
                ..Default::default()
            })
            .await?;
        Ok(())
    }

    /// Per-status attendance totals over the student's whole record.
    pub async fn get_student_attendance_history(
        &self,
        principal: &Principal,
        id: &StudentId,
    ) -> Result<AttendanceCounts, ServiceError> {
        self.get_student(principal, id).await?;

        Ok(self
            .attendance_repository
            .get_attendance_counts(
                AttendanceFilter {
                    student_id: Some(*id),
                    ..Default::default()
                },
                &scope_for(principal, Resource::Attendance),
            )
            .await?)
    }

    /// The student's payments, newest first.
    pub async fn get_student_payment_history(
        &self,
        principal: &Principal,
        id: &StudentId,
    ) -> Result<GetListResponse<Payment>, ServiceError> {
        self.get_student(principal, id).await?;

        Ok(self
            .payment_repository
            .get_payment_list(
                PaymentListQuery {
                    sorting: Some(ListSorting {
                        column: SortablePaymentColumn::PaymentDate,
                        direction: Some(SortDirection::Descending),
                    }),
                    filtering: Some(PaymentFilter {
                        student_id: Some(*id),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                &scope_for(principal, Resource::Payment),
            )
            .await?)
    }

    pub async fn create_lead(
        &self,
        principal: &Principal,
        request: CreateLeadRequest,
    ) -> Result<LeadId, ServiceError> {
        self.ensure_staff(principal)?;

        let branch_scope = scope_for(principal, Resource::Branch);
        self.branch_repository
            .get_branch(&request.branch_id, &branch_scope)
            .await?
            .ok_or(EntityNotFoundError::Branch(request.branch_id))?;

        let now = OffsetDateTime::now_utc();
        let lead = Lead {
            id: Uuid::new_v4().into(),
            created_date: now,
            last_modified: now,
            branch_id: request.branch_id,
            name: request.name,
            email: request.email,
            phone: request.phone,
            course_interested_id: request.course_interested_id,
            status: LeadStatus::New,
            source: request.source,
            assigned_to_id: request.assigned_to_id,
            notes: request.notes,
        };
        let id = self.lead_repository.create_lead(lead).await?;
        Ok(id)
    }

    pub async fn get_lead(
        &self,
        principal: &Principal,
        id: &LeadId,
    ) -> Result<Lead, ServiceError> {
        let scope = scope_for(principal, Resource::Lead);
        self.lead_repository
            .get_lead(id, &scope)
            .await?
            .ok_or_else(|| EntityNotFoundError::Lead(*id).into())
    }

    pub async fn get_lead_list(
        &self,
        principal: &Principal,
        query: LeadListQuery,
    ) -> Result<GetListResponse<Lead>, ServiceError> {
        let scope = scope_for(principal, Resource::Lead);
        Ok(self.lead_repository.get_lead_list(query, &scope).await?)
    }

    pub async fn update_lead(
        &self,
        principal: &Principal,
        request: UpdateLeadRequest,
    ) -> Result<(), ServiceError> {
        self.ensure_staff(principal)?;
        self.get_lead(principal, &request.id).await?;
        self.lead_repository.update_lead(request).await?;
        Ok(())
    }

    /// Lead counts per acquisition source, over the caller's visible leads.
    pub async fn get_lead_statistics(
        &self,
        principal: &Principal,
    ) -> Result<LeadStatisticsResponse, ServiceError> {
        let scope = scope_for(principal, Resource::Lead);
        let sources = self.lead_repository.get_lead_source_counts(&scope).await?;
        Ok(LeadStatisticsResponse { sources })
    }

    /// Creates a student record from a lead and marks the lead converted.
    /// Converting twice is rejected rather than duplicating the student.
    pub async fn convert_lead_to_student(
        &self,
        principal: &Principal,
        id: &LeadId,
    ) -> Result<ConvertLeadResponse, ServiceError> {
        self.ensure_staff(principal)?;
        let lead = self.get_lead(principal, id).await?;
        if lead.status == LeadStatus::Converted {
            return Err(BusinessLogicError::LeadAlreadyConverted(lead.id).into());
        }

        let (first_name, last_name) = split_name(&lead.name);
        let now = OffsetDateTime::now_utc();
        let student = Student {
            id: Uuid::new_v4().into(),
            created_date: now,
            last_modified: now,
            user_id: None,
            branch_id: lead.branch_id,
            group_id: None,
            first_name,
            last_name,
            phone: lead.phone.clone(),
            date_of_birth: None,
            enrollment_date: now.date(),
            address: String::new(),
            parent_name: String::new(),
            parent_phone: String::new(),
            parent_email: String::new(),
            passport_number: None,
            status: PersonStatus::Active,
        };
        let student_id = self.student_repository.create_student(student).await?;

        self.lead_repository
            .update_lead(UpdateLeadRequest {
                id: lead.id,
                status: Some(LeadStatus::Converted),
                ..Default::default()
            })
            .await?;

        Ok(ConvertLeadResponse { student_id })
    }

    pub async fn create_contract(
        &self,
        principal: &Principal,
        request: CreateContractRequest,
    ) -> Result<ContractId, ServiceError> {
        self.ensure_staff(principal)?;
        self.get_student(principal, &request.student_id).await?;

        let group_scope = scope_for(principal, Resource::Group);
        self.group_repository
            .get_group(&request.group_id, &group_scope)
            .await?
            .ok_or(EntityNotFoundError::Group(request.group_id))?;

        let contract = Contract {
            id: Uuid::new_v4().into(),
            created_date: OffsetDateTime::now_utc(),
            student_id: request.student_id,
            group_id: request.group_id,
            contract_number: request.contract_number.clone(),
            contract_file_path: request.contract_file_path,
            signed_date: request.signed_date,
            is_verified: false,
            verified_by_id: None,
        };
        match self.contract_repository.create_contract(contract).await {
            Ok(id) => Ok(id),
            Err(DataLayerError::AlreadyExists) => Err(EntityAlreadyExistsError::ContractNumber(
                request.contract_number,
            )
            .into()),
            Err(error) => Err(error.into()),
        }
    }

    pub async fn get_contract(
        &self,
        principal: &Principal,
        id: &ContractId,
    ) -> Result<Contract, ServiceError> {
        let scope = scope_for(principal, Resource::Contract);
        self.contract_repository
            .get_contract(id, &scope)
            .await?
            .ok_or_else(|| EntityNotFoundError::Contract(*id).into())
    }

    pub async fn get_contract_list(
        &self,
        principal: &Principal,
        query: ContractListQuery,
    ) -> Result<GetListResponse<Contract>, ServiceError> {
        let scope = scope_for(principal, Resource::Contract);
        Ok(self
            .contract_repository
            .get_contract_list(query, &scope)
            .await?)
    }

    /// Idempotent; the first verifier wins.
    pub async fn verify_contract(
        &self,
        principal: &Principal,
        id: &ContractId,
    ) -> Result<(), ServiceError> {
        self.ensure_staff(principal)?;
        let contract = self.get_contract(principal, id).await?;
        if contract.is_verified {
            return Ok(());
        }
        let profile_id = principal
            .profile_id()
            .ok_or(ValidationError::Forbidden)?;
        self.contract_repository.set_verified(id, profile_id).await?;
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

/// Leads carry a single free-form name; the student record wants two parts.
/// Splits on the last space, single-word names become the first name.
fn split_name(name: &str) -> (String, String) {
    match name.trim().rsplit_once(' ') {
        Some((first, last)) => (first.to_string(), last.to_string()),
        None => (name.trim().to_string(), String::new()),
    }
}

#[cfg(test)]
mod split_name_test {
    use super::split_name;

    #[test]
    fn splits_on_last_space() {
        assert_eq!(
            split_name("Anna Maria Lopez"),
            ("Anna Maria".to_string(), "Lopez".to_string())
        );
    }

    #[test]
    fn single_word_becomes_first_name() {
        assert_eq!(split_name(" Cher "), ("Cher".to_string(), String::new()));
    }
}
