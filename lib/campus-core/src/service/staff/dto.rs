use shared_types::{BranchId, UserId};
use time::Date;

#[derive(Clone, Debug)]
pub struct CreateTeacherRequest {
    pub user_id: UserId,
    pub branch_id: BranchId,
    pub phone: String,
    pub date_of_birth: Option<Date>,
    pub specialization: String,
    pub qualification: String,
    pub hire_date: Date,
    pub hourly_rate: i64,
    pub address: String,
    pub passport_number: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TeacherPerformanceResponse {
    pub lessons: u64,
    pub attendances_marked: u64,
    pub assignments: u64,
    pub exams: u64,
    /// 0.0 to 5.0 inclusive.
    pub performance_rating: f64,
}
