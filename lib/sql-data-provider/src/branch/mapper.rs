use campus_core::model::branch::{
    Branch, BranchFilter, SortableBranchColumn, UpdateBranchRequest,
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::IntoSimpleExpr;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Condition, Set};
use time::OffsetDateTime;

use crate::entity::branch;
use crate::list_query::{IntoFilterCondition, IntoSortingColumn};

impl From<Branch> for branch::ActiveModel {
    fn from(value: Branch) -> Self {
        Self {
            id: Set(value.id),
            created_date: Set(value.created_date),
            last_modified: Set(value.last_modified),
            center_id: Set(value.center_id),
            name: Set(value.name),
            address: Set(value.address),
            phone: Set(value.phone),
            manager_id: Set(value.manager_id),
            status: Set(value.status.into()),
        }
    }
}

impl From<branch::Model> for Branch {
    fn from(value: branch::Model) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            last_modified: value.last_modified,
            center_id: value.center_id,
            name: value.name,
            address: value.address,
            phone: value.phone,
            manager_id: value.manager_id,
            status: value.status.into(),
        }
    }
}

impl From<UpdateBranchRequest> for branch::ActiveModel {
    fn from(value: UpdateBranchRequest) -> Self {
        Self {
            id: Set(value.id),
            last_modified: Set(OffsetDateTime::now_utc()),
            name: value.name.map(Set).unwrap_or(NotSet),
            address: value.address.map(Set).unwrap_or(NotSet),
            phone: value.phone.map(Set).unwrap_or(NotSet),
            manager_id: value.manager_id.map(Set).unwrap_or(NotSet),
            status: value.status.map(|status| Set(status.into())).unwrap_or(NotSet),
            ..Default::default()
        }
    }
}

impl IntoSortingColumn for SortableBranchColumn {
    fn get_column(&self) -> SimpleExpr {
        match self {
            Self::Name => branch::Column::Name,
            Self::CreatedDate => branch::Column::CreatedDate,
        }
        .into_simple_expr()
    }
}

impl IntoFilterCondition for BranchFilter {
    fn get_condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(name) = &self.name {
            condition = condition.add(branch::Column::Name.starts_with(name));
        }
        if let Some(status) = self.status {
            condition = condition.add(branch::Column::Status.eq(branch::BranchStatus::from(status)));
        }
        condition
    }
}
