use campus_core::model::teacher::{
    SortableTeacherColumn, Teacher, TeacherFilter, UpdateTeacherRequest,
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::IntoSimpleExpr;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Condition, Set};
use time::OffsetDateTime;

use crate::entity::teacher;
use crate::list_query::{IntoFilterCondition, IntoSortingColumn};

impl From<Teacher> for teacher::ActiveModel {
    fn from(value: Teacher) -> Self {
        Self {
            id: Set(value.id),
            created_date: Set(value.created_date),
            last_modified: Set(value.last_modified),
            user_id: Set(value.user_id),
            branch_id: Set(value.branch_id),
            status: Set(value.status.into()),
            phone: Set(value.phone),
            date_of_birth: Set(value.date_of_birth),
            specialization: Set(value.specialization),
            qualification: Set(value.qualification),
            performance_rating: Set(value.performance_rating),
            hire_date: Set(value.hire_date),
            hourly_rate: Set(value.hourly_rate),
            address: Set(value.address),
            passport_number: Set(value.passport_number),
        }
    }
}

impl From<teacher::Model> for Teacher {
    fn from(value: teacher::Model) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            last_modified: value.last_modified,
            user_id: value.user_id,
            branch_id: value.branch_id,
            status: value.status.into(),
            phone: value.phone,
            date_of_birth: value.date_of_birth,
            specialization: value.specialization,
            qualification: value.qualification,
            performance_rating: value.performance_rating,
            hire_date: value.hire_date,
            hourly_rate: value.hourly_rate,
            address: value.address,
            passport_number: value.passport_number,
        }
    }
}

impl From<UpdateTeacherRequest> for teacher::ActiveModel {
    fn from(value: UpdateTeacherRequest) -> Self {
        Self {
            id: Set(value.id),
            last_modified: Set(OffsetDateTime::now_utc()),
            branch_id: value.branch_id.map(Set).unwrap_or(NotSet),
            status: value.status.map(|status| Set(status.into())).unwrap_or(NotSet),
            phone: value.phone.map(Set).unwrap_or(NotSet),
            specialization: value.specialization.map(Set).unwrap_or(NotSet),
            qualification: value.qualification.map(Set).unwrap_or(NotSet),
            performance_rating: value.performance_rating.map(Set).unwrap_or(NotSet),
            hourly_rate: value.hourly_rate.map(Set).unwrap_or(NotSet),
            address: value.address.map(Set).unwrap_or(NotSet),
            ..Default::default()
        }
    }
}

impl IntoSortingColumn for SortableTeacherColumn {
    fn get_column(&self) -> SimpleExpr {
        match self {
            Self::HireDate => teacher::Column::HireDate,
            Self::PerformanceRating => teacher::Column::PerformanceRating,
            Self::CreatedDate => teacher::Column::CreatedDate,
        }
        .into_simple_expr()
    }
}

impl IntoFilterCondition for TeacherFilter {
    fn get_condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(branch_id) = self.branch_id {
            condition = condition.add(teacher::Column::BranchId.eq(branch_id));
        }
        if let Some(status) = self.status {
            condition =
                condition.add(teacher::Column::Status.eq(teacher::PersonStatus::from(status)));
        }
        if let Some(specialization) = &self.specialization {
            condition = condition.add(teacher::Column::Specialization.starts_with(specialization));
        }
        condition
    }
}
