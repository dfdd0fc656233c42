use shared_types::{BranchId, GroupId, ProfileId, StudentId, SubjectId, UserId};
use time::Date;

use crate::model::lead::{LeadSource, LeadSourceCount};

#[derive(Clone, Debug)]
pub struct CreateStudentRequest {
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
}

#[derive(Clone, Debug)]
pub struct CreateLeadRequest {
    pub branch_id: BranchId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course_interested_id: Option<SubjectId>,
    pub source: LeadSource,
    pub assigned_to_id: Option<ProfileId>,
    pub notes: String,
}

#[derive(Clone, Debug)]
pub struct ConvertLeadResponse {
    pub student_id: StudentId,
}

#[derive(Clone, Debug)]
pub struct CreateContractRequest {
    pub student_id: StudentId,
    pub group_id: GroupId,
    pub contract_number: String,
    pub contract_file_path: String,
    pub signed_date: Date,
}

#[derive(Clone, Debug)]
pub struct LeadStatisticsResponse {
    pub sources: Vec<LeadSourceCount>,
}
