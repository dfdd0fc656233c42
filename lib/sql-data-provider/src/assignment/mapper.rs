use campus_core::model::assignment::{
    Assignment, AssignmentFilter, SortableAssignmentColumn, UpdateAssignmentRequest,
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::IntoSimpleExpr;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Condition, Set};
use time::OffsetDateTime;

use crate::entity::assignment;
use crate::list_query::{IntoFilterCondition, IntoSortingColumn};

impl From<Assignment> for assignment::ActiveModel {
    fn from(value: Assignment) -> Self {
        Self {
            id: Set(value.id),
            created_date: Set(value.created_date),
            last_modified: Set(value.last_modified),
            group_id: Set(value.group_id),
            teacher_id: Set(value.teacher_id),
            title: Set(value.title),
            description: Set(value.description),
            file_path: Set(value.file_path),
            due_date: Set(value.due_date),
            status: Set(value.status.into()),
        }
    }
}

impl From<assignment::Model> for Assignment {
    fn from(value: assignment::Model) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            last_modified: value.last_modified,
            group_id: value.group_id,
            teacher_id: value.teacher_id,
            title: value.title,
            description: value.description,
            file_path: value.file_path,
            due_date: value.due_date,
            status: value.status.into(),
        }
    }
}

impl From<UpdateAssignmentRequest> for assignment::ActiveModel {
    fn from(value: UpdateAssignmentRequest) -> Self {
        Self {
            id: Set(value.id),
            last_modified: Set(OffsetDateTime::now_utc()),
            title: value.title.map(Set).unwrap_or(NotSet),
            description: value.description.map(Set).unwrap_or(NotSet),
            due_date: value.due_date.map(Set).unwrap_or(NotSet),
            status: value.status.map(|s| Set(s.into())).unwrap_or(NotSet),
            ..Default::default()
        }
    }
}

impl IntoSortingColumn for SortableAssignmentColumn {
    fn get_column(&self) -> SimpleExpr {
        match self {
            Self::DueDate => assignment::Column::DueDate,
            Self::CreatedDate => assignment::Column::CreatedDate,
        }
        .into_simple_expr()
    }
}

impl IntoFilterCondition for AssignmentFilter {
    fn get_condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(group_id) = self.group_id {
            condition = condition.add(assignment::Column::GroupId.eq(group_id));
        }
        if let Some(teacher_id) = self.teacher_id {
            condition = condition.add(assignment::Column::TeacherId.eq(teacher_id));
        }
        if let Some(status) = self.status {
            condition = condition
                .add(assignment::Column::Status.eq(assignment::AssignmentStatus::from(status)));
        }
        condition
    }
}
