use shared_types::{BranchId, GroupId, RoomId, SubjectId, TeacherId};
use time::{Date, Time};

#[derive(Clone, Debug)]
pub struct CreateGroupRequest {
    pub branch_id: BranchId,
    pub subject_id: SubjectId,
    pub teacher_id: Option<TeacherId>,
    pub room_id: Option<RoomId>,
    pub name: String,
    pub capacity: u32,
    pub start_date: Date,
    pub end_date: Date,
}

#[derive(Clone, Debug)]
pub struct CreateLessonRequest {
    pub group_id: GroupId,
    pub teacher_id: Option<TeacherId>,
    pub room_id: Option<RoomId>,
    pub date: Date,
    pub start_time: Time,
    pub end_time: Time,
    pub duration: u32,
}

#[derive(Clone, Debug)]
pub struct OnlineLinkResponse {
    pub online_link: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupStatisticsResponse {
    pub students: u64,
    pub lessons: u64,
    /// Share of present marks over all attendance rows, in percent.
    pub average_attendance: f64,
    /// Minor currency units.
    pub payments_total: i64,
    pub payments_count: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GroupAttendanceReportResponse {
    pub total_lessons: u64,
    pub total_attendances: u64,
    pub present: u64,
    pub absent: u64,
    pub late: u64,
}
