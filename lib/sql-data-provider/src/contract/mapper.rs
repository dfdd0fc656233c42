use campus_core::model::contract::{Contract, ContractFilter, SortableContractColumn};
use sea_orm::IntoSimpleExpr;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Condition, Set};

use crate::entity::contract;
use crate::list_query::{IntoFilterCondition, IntoSortingColumn};

impl From<Contract> for contract::ActiveModel {
    fn from(value: Contract) -> Self {
        Self {
            id: Set(value.id),
            created_date: Set(value.created_date),
            student_id: Set(value.student_id),
            group_id: Set(value.group_id),
            contract_number: Set(value.contract_number),
            contract_file_path: Set(value.contract_file_path),
            signed_date: Set(value.signed_date),
            is_verified: Set(value.is_verified),
            verified_by_id: Set(value.verified_by_id),
        }
    }
}

impl IntoSortingColumn for SortableContractColumn {
    fn get_column(&self) -> SimpleExpr {
        match self {
            Self::SignedDate => contract::Column::SignedDate,
            Self::CreatedDate => contract::Column::CreatedDate,
        }
        .into_simple_expr()
    }
}

impl IntoFilterCondition for ContractFilter {
    fn get_condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(student_id) = self.student_id {
            condition = condition.add(contract::Column::StudentId.eq(student_id));
        }
        if let Some(group_id) = self.group_id {
            condition = condition.add(contract::Column::GroupId.eq(group_id));
        }
        if let Some(is_verified) = self.is_verified {
            condition = condition.add(contract::Column::IsVerified.eq(is_verified));
        }
        condition
    }
}
