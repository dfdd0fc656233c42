use campus_core::model::student::{
    SortableStudentColumn, Student, StudentFilter, UpdateStudentRequest,
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::IntoSimpleExpr;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Condition, Set};
use time::OffsetDateTime;

use crate::entity::student;
use crate::entity::teacher::PersonStatus;
use crate::list_query::{IntoFilterCondition, IntoSortingColumn};

impl From<Student> for student::ActiveModel {
    fn from(value: Student) -> Self {
        Self {
            id: Set(value.id),
            created_date: Set(value.created_date),
            last_modified: Set(value.last_modified),
            user_id: Set(value.user_id),
            branch_id: Set(value.branch_id),
            group_id: Set(value.group_id),
            first_name: Set(value.first_name),
            last_name: Set(value.last_name),
            phone: Set(value.phone),
            date_of_birth: Set(value.date_of_birth),
            enrollment_date: Set(value.enrollment_date),
            address: Set(value.address),
            parent_name: Set(value.parent_name),
            parent_phone: Set(value.parent_phone),
            parent_email: Set(value.parent_email),
            passport_number: Set(value.passport_number),
            status: Set(value.status.into()),
        }
    }
}

impl From<student::Model> for Student {
    fn from(value: student::Model) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            last_modified: value.last_modified,
            user_id: value.user_id,
            branch_id: value.branch_id,
            group_id: value.group_id,
            first_name: value.first_name,
            last_name: value.last_name,
            phone: value.phone,
            date_of_birth: value.date_of_birth,
            enrollment_date: value.enrollment_date,
            address: value.address,
            parent_name: value.parent_name,
            parent_phone: value.parent_phone,
            parent_email: value.parent_email,
            passport_number: value.passport_number,
            status: value.status.into(),
        }
    }
}

impl From<UpdateStudentRequest> for student::ActiveModel {
    fn from(value: UpdateStudentRequest) -> Self {
        Self {
            id: Set(value.id),
            last_modified: Set(OffsetDateTime::now_utc()),
            branch_id: value.branch_id.map(Set).unwrap_or(NotSet),
            group_id: value.group_id.map(Set).unwrap_or(NotSet),
            first_name: value.first_name.map(Set).unwrap_or(NotSet),
            last_name: value.last_name.map(Set).unwrap_or(NotSet),
            phone: value.phone.map(Set).unwrap_or(NotSet),
            address: value.address.map(Set).unwrap_or(NotSet),
            parent_name: value.parent_name.map(Set).unwrap_or(NotSet),
            parent_phone: value.parent_phone.map(Set).unwrap_or(NotSet),
            parent_email: value.parent_email.map(Set).unwrap_or(NotSet),
            status: value.status.map(|status| Set(status.into())).unwrap_or(NotSet),
            ..Default::default()
        }
    }
}

impl IntoSortingColumn for SortableStudentColumn {
    fn get_column(&self) -> SimpleExpr {
        match self {
            Self::LastName => student::Column::LastName,
            Self::EnrollmentDate => student::Column::EnrollmentDate,
            Self::CreatedDate => student::Column::CreatedDate,
        }
        .into_simple_expr()
    }
}

impl IntoFilterCondition for StudentFilter {
    fn get_condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(name) = &self.name {
            condition = condition.add(
                Condition::any()
                    .add(student::Column::FirstName.starts_with(name))
                    .add(student::Column::LastName.starts_with(name)),
            );
        }
        if let Some(branch_id) = self.branch_id {
            condition = condition.add(student::Column::BranchId.eq(branch_id));
        }
        if let Some(group_id) = self.group_id {
            condition = condition.add(student::Column::GroupId.eq(group_id));
        }
        if let Some(status) = self.status {
            condition = condition.add(student::Column::Status.eq(PersonStatus::from(status)));
        }
        condition
    }
}
