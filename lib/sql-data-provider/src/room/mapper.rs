use campus_core::model::branch::{Room, RoomFilter, SortableRoomColumn, UpdateRoomRequest};
use sea_orm::ActiveValue::NotSet;
use sea_orm::IntoSimpleExpr;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Condition, Set};

use crate::entity::room;
use crate::list_query::{IntoFilterCondition, IntoSortingColumn};

impl From<Room> for room::ActiveModel {
    fn from(value: Room) -> Self {
        Self {
            id: Set(value.id),
            branch_id: Set(value.branch_id),
            name: Set(value.name),
            capacity: Set(value.capacity),
            equipment: Set(value.equipment),
            is_available: Set(value.is_available),
        }
    }
}

impl From<UpdateRoomRequest> for room::ActiveModel {
    fn from(value: UpdateRoomRequest) -> Self {
        Self {
            id: Set(value.id),
            name: value.name.map(Set).unwrap_or(NotSet),
            capacity: value.capacity.map(Set).unwrap_or(NotSet),
            equipment: value.equipment.map(Set).unwrap_or(NotSet),
            is_available: value.is_available.map(Set).unwrap_or(NotSet),
            ..Default::default()
        }
    }
}

impl IntoSortingColumn for SortableRoomColumn {
    fn get_column(&self) -> SimpleExpr {
        match self {
            Self::Name => room::Column::Name,
            Self::Capacity => room::Column::Capacity,
        }
        .into_simple_expr()
    }
}

impl IntoFilterCondition for RoomFilter {
    fn get_condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(branch_id) = self.branch_id {
            condition = condition.add(room::Column::BranchId.eq(branch_id));
        }
        if let Some(is_available) = self.is_available {
            condition = condition.add(room::Column::IsAvailable.eq(is_available));
        }
        condition
    }
}
