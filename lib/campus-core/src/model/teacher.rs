use shared_types::{BranchId, TeacherId, UserId};
use strum::{Display, EnumString};
use time::{Date, OffsetDateTime};

use super::common::ListQuery;

/// Shared lifecycle state for people records (teachers and students).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, EnumString)]
pub enum PersonStatus {
    Active,
    Inactive,
    Blocked,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Teacher {
    pub id: TeacherId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub user_id: UserId,
    pub branch_id: BranchId,
    pub status: PersonStatus,
    pub phone: String,
    pub date_of_birth: Option<Date>,
    pub specialization: String,
    pub qualification: String,
    /// 0.0 to 5.0 inclusive.
    pub performance_rating: f64,
    pub hire_date: Date,
    /// Minor currency units per hour.
    pub hourly_rate: i64,
    pub address: String,
    pub passport_number: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct UpdateTeacherRequest {
    pub id: TeacherId,
    pub branch_id: Option<BranchId>,
    pub status: Option<PersonStatus>,
    pub phone: Option<String>,
    pub specialization: Option<String>,
    pub qualification: Option<String>,
    pub performance_rating: Option<f64>,
    pub hourly_rate: Option<i64>,
    pub address: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortableTeacherColumn {
    HireDate,
    PerformanceRating,
    CreatedDate,
}

#[derive(Clone, Debug, Default)]
pub struct TeacherFilter {
    pub branch_id: Option<BranchId>,
    pub status: Option<PersonStatus>,
    pub specialization: Option<String>,
}

pub type TeacherListQuery = ListQuery<SortableTeacherColumn, TeacherFilter>;
