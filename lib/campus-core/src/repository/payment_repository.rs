use shared_types::PaymentId;

use super::error::DataLayerError;
use crate::model::common::GetListResponse;
use crate::model::payment::{Payment, PaymentFilter, PaymentListQuery, PaymentTotals};
use crate::model::scope::VisibilityScope;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Fails with [`DataLayerError::AlreadyExists`] on a duplicate receipt
    /// number.
    async fn create_payment(&self, request: Payment) -> Result<PaymentId, DataLayerError>;

    async fn get_payment(
        &self,
        id: &PaymentId,
        scope: &VisibilityScope,
    ) -> Result<Option<Payment>, DataLayerError>;

    async fn get_payment_list(
        &self,
        query: PaymentListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Payment>, DataLayerError>;

    async fn get_payment_totals(
        &self,
        filter: PaymentFilter,
        scope: &VisibilityScope,
    ) -> Result<PaymentTotals, DataLayerError>;

    async fn delete_payment(&self, id: &PaymentId) -> Result<(), DataLayerError>;
}
