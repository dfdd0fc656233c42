use autometrics::autometrics;
use campus_core::model::common::GetListResponse;
use campus_core::model::lead::{Lead, LeadListQuery, LeadSourceCount, UpdateLeadRequest};
use campus_core::model::scope::VisibilityScope;
use campus_core::repository::error::DataLayerError;
use campus_core::repository::lead_repository::LeadRepository;
use one_dto_mapper::convert_inner;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect};
use shared_types::LeadId;

use super::LeadProvider;
use crate::entity::lead;
use crate::list_query::{SelectWithListQuery, total_pages};
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};
use crate::scope;

#[autometrics]
#[async_trait::async_trait]
impl LeadRepository for LeadProvider {
    async fn create_lead(&self, request: Lead) -> Result<LeadId, DataLayerError> {
        let lead = lead::Entity::insert(lead::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(lead.last_insert_id)
    }

    async fn get_lead(
        &self,
        id: &LeadId,
        scope: &VisibilityScope,
    ) -> Result<Option<Lead>, DataLayerError> {
        let lead = lead::Entity::find_by_id(id)
            .filter(scope::lead_condition(scope))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(lead))
    }

    async fn get_lead_list(
        &self,
        query: LeadListQuery,
        scope: &VisibilityScope,
    ) -> Result<GetListResponse<Lead>, DataLayerError> {
        let filtered = lead::Entity::find()
            .filter(scope::lead_condition(scope))
            .with_filtering(&query);

        let total_items = filtered
            .clone()
            .count(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let leads: Vec<lead::Model> = filtered
            .with_sorting_and_pagination(&query)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(GetListResponse {
            total_pages: total_pages(total_items, query.pagination.as_ref()),
            total_items,
            values: convert_inner(leads),
        })
    }

    async fn get_lead_source_counts(
        &self,
        scope: &VisibilityScope,
    ) -> Result<Vec<LeadSourceCount>, DataLayerError> {
        let rows: Vec<(lead::LeadSource, i64)> = lead::Entity::find()
            .select_only()
            .column(lead::Column::Source)
            .column_as(lead::Column::Id.count(), "count")
            .filter(scope::lead_condition(scope))
            .group_by(lead::Column::Source)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(rows
            .into_iter()
            .map(|(source, count)| LeadSourceCount {
                source: source.into(),
                count: count as u64,
            })
            .collect())
    }

    async fn update_lead(&self, request: UpdateLeadRequest) -> Result<(), DataLayerError> {
        lead::Entity::update(lead::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_update_data_layer_error)?;
        Ok(())
    }

    async fn delete_lead(&self, id: &LeadId) -> Result<(), DataLayerError> {
        let result = lead::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotFound);
        }
        Ok(())
    }
}
