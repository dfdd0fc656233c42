use campus_core::model::center::{SortableSubjectColumn, Subject, SubjectFilter};
use sea_orm::IntoSimpleExpr;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Condition, Set};

use crate::entity::subject;
use crate::list_query::{IntoFilterCondition, IntoSortingColumn};

impl From<Subject> for subject::ActiveModel {
    fn from(value: Subject) -> Self {
        Self {
            id: Set(value.id),
            created_date: Set(value.created_date),
            center_id: Set(value.center_id),
            name: Set(value.name),
            description: Set(value.description),
        }
    }
}

impl IntoSortingColumn for SortableSubjectColumn {
    fn get_column(&self) -> SimpleExpr {
        match self {
            Self::Name => subject::Column::Name,
            Self::CreatedDate => subject::Column::CreatedDate,
        }
        .into_simple_expr()
    }
}

impl IntoFilterCondition for SubjectFilter {
    fn get_condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(name) = &self.name {
            condition = condition.add(subject::Column::Name.starts_with(name));
        }
        condition
    }
}
