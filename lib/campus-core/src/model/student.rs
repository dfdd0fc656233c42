use shared_types::{BranchId, GroupId, StudentId, UserId};
use time::{Date, OffsetDateTime};

use super::common::ListQuery;
use super::teacher::PersonStatus;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Student {
    pub id: StudentId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub user_id: Option<UserId>,
    pub branch_id: BranchId,
    pub group_id: Option<GroupId>,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub date_of_birth: Option<Date>,
    pub enrollment_date: Date,
    pub address: String,
    pub parent_name: String,
    pub parent_phone: String,
    pub parent_email: String,
    pub passport_number: Option<String>,
    pub status: PersonStatus,
}

#[derive(Clone, Debug, Default)]
pub struct UpdateStudentRequest {
    pub id: StudentId,
    pub branch_id: Option<BranchId>,
    pub group_id: Option<Option<GroupId>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub parent_name: Option<String>,
    pub parent_phone: Option<String>,
    pub parent_email: Option<String>,
    pub status: Option<PersonStatus>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortableStudentColumn {
    LastName,
    EnrollmentDate,
    CreatedDate,
}

#[derive(Clone, Debug, Default)]
pub struct StudentFilter {
    pub name: Option<String>,
    pub branch_id: Option<BranchId>,
    pub group_id: Option<GroupId>,
    pub status: Option<PersonStatus>,
}

pub type StudentListQuery = ListQuery<SortableStudentColumn, StudentFilter>;
