use shared_types::PaymentId;
use time::OffsetDateTime;
use uuid::Uuid;

use super::PaymentService;
use super::dto::CreatePaymentRequest;
use crate::model::common::GetListResponse;
use crate::model::payment::{Payment, PaymentListQuery};
use crate::model::scope::{Principal, Resource, scope_for};
use crate::repository::error::DataLayerError;
use crate::service::error::{
    EntityAlreadyExistsError, EntityNotFoundError, ServiceError, ValidationError,
};

impl PaymentService {
    pub async fn create_payment(
        &self,
        principal: &Principal,
        request: CreatePaymentRequest,
    ) -> Result<PaymentId, ServiceError> {
        if !principal.is_super_admin() && !principal.is_center_staff() {
            return Err(ValidationError::Forbidden.into());
        }

        let student_scope = scope_for(principal, Resource::Student);
        self.student_repository
            .get_student(&request.student_id, &student_scope)
            .await?
            .ok_or(EntityNotFoundError::Student(request.student_id))?;

        let group_scope = scope_for(principal, Resource::Group);
        self.group_repository
            .get_group(&request.group_id, &group_scope)
            .await?
            .ok_or(EntityNotFoundError::Group(request.group_id))?;

        let now = OffsetDateTime::now_utc();
        let payment = Payment {
            id: Uuid::new_v4().into(),
            created_date: now,
            student_id: request.student_id,
            group_id: request.group_id,
            amount: request.amount,
            payment_type: request.payment_type,
            payment_date: now.date(),
            due_date: request.due_date,
            receipt_number: request.receipt_number.clone(),
            document_path: request.document_path,
            paid_by_id: principal.profile_id(),
            notes: request.notes,
        };
        match self.payment_repository.create_payment(payment).await {
            Ok(id) => Ok(id),
            Err(DataLayerError::AlreadyExists) => {
                Err(EntityAlreadyExistsError::ReceiptNumber(request.receipt_number).into())
            }
            Err(error) => Err(error.into()),
        }
    }

    pub async fn get_payment(
        &self,
        principal: &Principal,
        id: &PaymentId,
    ) -> Result<Payment, ServiceError> {
        let scope = scope_for(principal, Resource::Payment);
        self.payment_repository
            .get_payment(id, &scope)
            .await?
            .ok_or_else(|| EntityNotFoundError::Payment(*id).into())
    }

    pub async fn get_payment_list(
        &self,
        principal: &Principal,
        query: PaymentListQuery,
    ) -> Result<GetListResponse<Payment>, ServiceError> {
        let scope = scope_for(principal, Resource::Payment);
        Ok(self
            .payment_repository
            .get_payment_list(query, &scope)
            .await?)
    }

    pub async fn delete_payment(
        &self,
        principal: &Principal,
        id: &PaymentId,
    ) -> Result<(), ServiceError> {
        if !principal.is_super_admin() && !principal.is_center_staff() {
            return Err(ValidationError::Forbidden.into());
        }
        self.get_payment(principal, id).await?;
        self.payment_repository.delete_payment(id).await?;
        Ok(())
    }
}
