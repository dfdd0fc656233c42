use campus_core::model::lead::{Lead, LeadFilter, SortableLeadColumn, UpdateLeadRequest};
use sea_orm::ActiveValue::NotSet;
use sea_orm::IntoSimpleExpr;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Condition, Set};
use time::OffsetDateTime;

use crate::entity::lead;
use crate::list_query::{IntoFilterCondition, IntoSortingColumn};

impl From<Lead> for lead::ActiveModel {
    fn from(value: Lead) -> Self {
        Self {
            id: Set(value.id),
            created_date: Set(value.created_date),
            last_modified: Set(value.last_modified),
            branch_id: Set(value.branch_id),
            name: Set(value.name),
            email: Set(value.email),
            phone: Set(value.phone),
            course_interested_id: Set(value.course_interested_id),
            status: Set(value.status.into()),
            source: Set(value.source.into()),
            assigned_to_id: Set(value.assigned_to_id),
            notes: Set(value.notes),
        }
    }
}

impl From<lead::Model> for Lead {
    fn from(value: lead::Model) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            last_modified: value.last_modified,
            branch_id: value.branch_id,
            name: value.name,
            email: value.email,
            phone: value.phone,
            course_interested_id: value.course_interested_id,
            status: value.status.into(),
            source: value.source.into(),
            assigned_to_id: value.assigned_to_id,
            notes: value.notes,
        }
    }
}

impl From<UpdateLeadRequest> for lead::ActiveModel {
    fn from(value: UpdateLeadRequest) -> Self {
        Self {
            id: Set(value.id),
            last_modified: Set(OffsetDateTime::now_utc()),
            name: value.name.map(Set).unwrap_or(NotSet),
            email: value.email.map(Set).unwrap_or(NotSet),
            phone: value.phone.map(Set).unwrap_or(NotSet),
            course_interested_id: value.course_interested_id.map(Set).unwrap_or(NotSet),
            status: value.status.map(|s| Set(s.into())).unwrap_or(NotSet),
            assigned_to_id: value.assigned_to_id.map(Set).unwrap_or(NotSet),
            notes: value.notes.map(Set).unwrap_or(NotSet),
            ..Default::default()
        }
    }
}

impl IntoSortingColumn for SortableLeadColumn {
    fn get_column(&self) -> SimpleExpr {
        match self {
            Self::Name => lead::Column::Name,
            Self::CreatedDate => lead::Column::CreatedDate,
        }
        .into_simple_expr()
    }
}

impl IntoFilterCondition for LeadFilter {
    fn get_condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(branch_id) = self.branch_id {
            condition = condition.add(lead::Column::BranchId.eq(branch_id));
        }
        if let Some(status) = self.status {
            condition = condition.add(lead::Column::Status.eq(lead::LeadStatus::from(status)));
        }
        if let Some(source) = self.source {
            condition = condition.add(lead::Column::Source.eq(lead::LeadSource::from(source)));
        }
        condition
    }
}
