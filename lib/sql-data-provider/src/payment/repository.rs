use autometrics::autometrics;
use campus_core::model::common::GetListResponse;
use campus_core::model::payment::{Payment, PaymentFilter, PaymentListQuery, PaymentTotals};
use campus_core::model::scope::VisibilityScope;
use campus_core::repository::error::DataLayerError;
use campus_core::repository::payment_repository::PaymentRepository;
use one_dto_mapper::convert_inner;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect};
use shared_types::PaymentId;

use super::PaymentProvider;
use crate::entity::payment;
use crate::list_query::{IntoFilterCondition, SelectWithListQuery, total_pages};
use crate::mapper::to_data_layer_error;
use crate::scope;

#[autometrics]
#[async_trait::async_trait]
impl PaymentRepository for PaymentProvider {
    async fn create_payment(&self, request: Payment) -> Result<PaymentId, DataLayerError> {
        let payment = payment::Entity::insert(payment::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(payment.last_insert_id)
    }

    async fn get_payment(
        &self,
        id: &PaymentId,
        scope: &VisibilityScope,
    ) -> Result<Option<Payment>, DataLayerError> {
        let payment = payment::Entity::find_by_id(id)
            .filter(scope::payment_condition(scope))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(payment))
    }

    async fn get_payment_list(
        &self,
        query: PaymentListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Payment>, DataLayerError> {
        let filtered = payment::Entity::find()
            .filter(scope::payment_condition(scope))
            .with_filtering(&query);

        let total_items = filtered
            .clone()
            .count(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let payments: Vec<payment::Model> = filtered
            .with_sorting_and_pagination(&query)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(GetListResponse {
            total_pages: total_pages(total_items, query.pagination.as_ref()),
            total_items,
            values: convert_inner(payments),
        })
    }

    async fn get_payment_totals(
        &self,
        filter: PaymentFilter,
        scope: &VisibilityScope,
    ) -> Result<PaymentTotals, DataLayerError> {
        let filtered = payment::Entity::find()
            .filter(scope::payment_condition(scope))
            .filter(filter.get_condition());

        let count = filtered
            .clone()
            .count(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        // SUM is NULL over an empty set
        let amount: Option<Option<i64>> = filtered
            .select_only()
            .column_as(payment::Column::Amount.sum(), "amount")
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(PaymentTotals {
            amount: amount.flatten().unwrap_or(0),
            count,
        })
    }

    async fn delete_payment(&self, id: &PaymentId) -> Result<(), DataLayerError> {
        let result = payment::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotFound);
        }
        Ok(())
    }
}
