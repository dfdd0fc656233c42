use shared_types::{ContractId, GroupId, ProfileId, StudentId};
use time::{Date, OffsetDateTime};

use super::common::ListQuery;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contract {
    pub id: ContractId,
    pub created_date: OffsetDateTime,
    pub student_id: StudentId,
    pub group_id: GroupId,
    pub contract_number: String,
    pub contract_file_path: String,
    pub signed_date: Date,
    pub is_verified: bool,
    pub verified_by_id: Option<ProfileId>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortableContractColumn {
    SignedDate,
    CreatedDate,
}

#[derive(Clone, Debug, Default)]
pub struct ContractFilter {
    pub student_id: Option<StudentId>,
    pub group_id: Option<GroupId>,
    pub is_verified: Option<bool>,
}

pub type ContractListQuery = ListQuery<SortableContractColumn, ContractFilter>;
