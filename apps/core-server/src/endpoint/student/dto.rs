use campus_core::model::attendance::AttendanceCounts;
use campus_core::model::student::Student;
use campus_core::service::enrollment::dto::CreateStudentRequest;
use one_dto_mapper::{From, Into, convert_inner};
use serde::{Deserialize, Serialize};
use shared_types::{BranchId, GroupId, StudentId, UserId};
use time::{Date, OffsetDateTime};
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::{GetListResponseRestDTO, ListQueryParamsRest};
use crate::endpoint::teacher::dto::PersonStatusRestEnum;

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(CreateStudentRequest)]
pub(crate) struct CreateStudentRequestRestDTO {
    pub user_id: Option<UserId>,
    pub branch_id: BranchId,
    pub group_id: Option<GroupId>,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub date_of_birth: Option<Date>,
    pub enrollment_date: Date,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub parent_name: String,
    #[serde(default)]
    pub parent_phone: String,
    #[serde(default)]
    pub parent_email: String,
    pub passport_number: Option<String>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(Student)]
pub(crate) struct StudentResponseRestDTO {
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
    pub status: PersonStatusRestEnum,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct UpdateStudentRequestRestDTO {
    pub branch_id: Option<BranchId>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub group_id: Option<Option<GroupId>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub parent_name: Option<String>,
    pub parent_phone: Option<String>,
    pub parent_email: Option<String>,
    pub status: Option<PersonStatusRestEnum>,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct AssignGroupRequestRestDTO {
    pub group_id: GroupId,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::student::SortableStudentColumn")]
pub(crate) enum SortableStudentColumnRestDTO {
    LastName,
    EnrollmentDate,
    CreatedDate,
}

#[derive(Clone, Debug, Deserialize, IntoParams, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::student::StudentFilter")]
pub(crate) struct StudentFilterQueryParamsRest {
    #[param(nullable = false)]
    pub name: Option<String>,
    #[param(nullable = false)]
    pub branch_id: Option<BranchId>,
    #[param(nullable = false)]
    pub group_id: Option<GroupId>,
    #[param(inline, nullable = false)]
    #[into(with_fn = convert_inner)]
    pub status: Option<PersonStatusRestEnum>,
}

pub(crate) type GetStudentsQuery =
    ListQueryParamsRest<StudentFilterQueryParamsRest, SortableStudentColumnRestDTO>;

pub(crate) type GetStudentListResponseRestDTO = GetListResponseRestDTO<StudentResponseRestDTO>;

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(AttendanceCounts)]
pub(crate) struct StudentAttendanceHistoryResponseRestDTO {
    pub total: u64,
    pub present: u64,
    pub absent: u64,
    pub late: u64,
    pub excused: u64,
}
