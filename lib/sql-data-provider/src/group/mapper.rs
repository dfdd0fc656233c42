use campus_core::model::group::{Group, GroupFilter, SortableGroupColumn, UpdateGroupRequest};
use sea_orm::ActiveValue::NotSet;
use sea_orm::IntoSimpleExpr;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Condition, Set};
use time::OffsetDateTime;

use crate::entity::group;
use crate::list_query::{IntoFilterCondition, IntoSortingColumn};

impl From<Group> for group::ActiveModel {
    fn from(value: Group) -> Self {
        Self {
            id: Set(value.id),
            created_date: Set(value.created_date),
            last_modified: Set(value.last_modified),
            center_id: Set(value.center_id),
            branch_id: Set(value.branch_id),
            subject_id: Set(value.subject_id),
            teacher_id: Set(value.teacher_id),
            room_id: Set(value.room_id),
            name: Set(value.name),
            capacity: Set(value.capacity),
            status: Set(value.status.into()),
            start_date: Set(value.start_date),
            end_date: Set(value.end_date),
        }
    }
}

impl From<group::Model> for Group {
    fn from(value: group::Model) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            last_modified: value.last_modified,
            center_id: value.center_id,
            branch_id: value.branch_id,
            subject_id: value.subject_id,
            teacher_id: value.teacher_id,
            room_id: value.room_id,
            name: value.name,
            capacity: value.capacity,
            status: value.status.into(),
            start_date: value.start_date,
            end_date: value.end_date,
        }
    }
}

impl From<UpdateGroupRequest> for group::ActiveModel {
    fn from(value: UpdateGroupRequest) -> Self {
        Self {
            id: Set(value.id),
            last_modified: Set(OffsetDateTime::now_utc()),
            name: value.name.map(Set).unwrap_or(NotSet),
            subject_id: value.subject_id.map(Set).unwrap_or(NotSet),
            teacher_id: value.teacher_id.map(Set).unwrap_or(NotSet),
            room_id: value.room_id.map(Set).unwrap_or(NotSet),
            capacity: value.capacity.map(Set).unwrap_or(NotSet),
            status: value.status.map(|status| Set(status.into())).unwrap_or(NotSet),
            start_date: value.start_date.map(Set).unwrap_or(NotSet),
            end_date: value.end_date.map(Set).unwrap_or(NotSet),
            ..Default::default()
        }
    }
}

impl IntoSortingColumn for SortableGroupColumn {
    fn get_column(&self) -> SimpleExpr {
        match self {
            Self::Name => group::Column::Name,
            Self::StartDate => group::Column::StartDate,
            Self::CreatedDate => group::Column::CreatedDate,
        }
        .into_simple_expr()
    }
}

impl IntoFilterCondition for GroupFilter {
    fn get_condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(name) = &self.name {
            condition = condition.add(group::Column::Name.starts_with(name));
        }
        if let Some(branch_id) = self.branch_id {
            condition = condition.add(group::Column::BranchId.eq(branch_id));
        }
        if let Some(subject_id) = self.subject_id {
            condition = condition.add(group::Column::SubjectId.eq(subject_id));
        }
        if let Some(teacher_id) = self.teacher_id {
            condition = condition.add(group::Column::TeacherId.eq(teacher_id));
        }
        if let Some(status) = self.status {
            condition = condition.add(group::Column::Status.eq(group::GroupStatus::from(status)));
        }
        condition
    }
}
