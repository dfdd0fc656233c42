use campus_core::model::teacher::Teacher;
use campus_core::service::staff::dto::{CreateTeacherRequest, TeacherPerformanceResponse};
use one_dto_mapper::{From, Into, convert_inner};
use serde::{Deserialize, Serialize};
use shared_types::{BranchId, TeacherId, UserId};
use time::{Date, OffsetDateTime};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::dto::common::{GetListResponseRestDTO, ListQueryParamsRest};

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(CreateTeacherRequest)]
pub(crate) struct CreateTeacherRequestRestDTO {
    pub user_id: UserId,
    pub branch_id: BranchId,
    pub phone: String,
    pub date_of_birth: Option<Date>,
    pub specialization: String,
    #[serde(default)]
    pub qualification: String,
    pub hire_date: Date,
    /// Minor currency units per hour.
    pub hourly_rate: i64,
    #[serde(default)]
    pub address: String,
    pub passport_number: Option<String>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(Teacher)]
pub(crate) struct TeacherResponseRestDTO {
    pub id: TeacherId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub user_id: UserId,
    pub branch_id: BranchId,
    pub status: PersonStatusRestEnum,
    pub phone: String,
    pub date_of_birth: Option<Date>,
    pub specialization: String,
    pub qualification: String,
    pub performance_rating: f64,
    pub hire_date: Date,
    pub hourly_rate: i64,
    pub address: String,
    pub passport_number: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, ToSchema, From, Into)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from("campus_core::model::teacher::PersonStatus")]
#[into("campus_core::model::teacher::PersonStatus")]
pub(crate) enum PersonStatusRestEnum {
    Active,
    Inactive,
    Blocked,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct UpdateTeacherRequestRestDTO {
    pub branch_id: Option<BranchId>,
    pub status: Option<PersonStatusRestEnum>,
    pub phone: Option<String>,
    pub specialization: Option<String>,
    pub qualification: Option<String>,
    pub performance_rating: Option<f64>,
    pub hourly_rate: Option<i64>,
    pub address: Option<String>,
}

#[derive(Clone, Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct RateTeacherRequestRestDTO {
    /// 0.0 to 5.0 inclusive.
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(TeacherPerformanceResponse)]
pub(crate) struct TeacherPerformanceResponseRestDTO {
    pub lessons: u64,
    pub attendances_marked: u64,
    pub assignments: u64,
    pub exams: u64,
    /// 0.0 to 5.0 inclusive.
    pub performance_rating: f64,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::teacher::SortableTeacherColumn")]
pub(crate) enum SortableTeacherColumnRestDTO {
    HireDate,
    PerformanceRating,
    CreatedDate,
}

#[derive(Clone, Debug, Deserialize, IntoParams, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::teacher::TeacherFilter")]
pub(crate) struct TeacherFilterQueryParamsRest {
    #[param(nullable = false)]
    pub branch_id: Option<BranchId>,
    #[param(inline, nullable = false)]
    #[into(with_fn = convert_inner)]
    pub status: Option<PersonStatusRestEnum>,
    #[param(nullable = false)]
    pub specialization: Option<String>,
}

pub(crate) type GetTeachersQuery =
    ListQueryParamsRest<TeacherFilterQueryParamsRest, SortableTeacherColumnRestDTO>;

pub(crate) type GetTeacherListResponseRestDTO = GetListResponseRestDTO<TeacherResponseRestDTO>;
