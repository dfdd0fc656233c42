use shared_types::{AttendanceId, GroupId, LessonId, StudentId, TeacherId};
use strum::{Display, EnumString};
use time::OffsetDateTime;

use super::common::ListQuery;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, EnumString)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Excused,
}

/// One row per (lesson, student); re-marking overwrites status, marker and
/// timestamp in place.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Attendance {
    pub id: AttendanceId,
    pub lesson_id: LessonId,
    pub student_id: StudentId,
    pub status: AttendanceStatus,
    pub marked_by_id: Option<TeacherId>,
    pub notes: String,
    pub marked_at: OffsetDateTime,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortableAttendanceColumn {
    MarkedAt,
}

#[derive(Clone, Debug, Default)]
pub struct AttendanceFilter {
    pub lesson_id: Option<LessonId>,
    pub student_id: Option<StudentId>,
    pub group_id: Option<GroupId>,
    pub marked_by_id: Option<TeacherId>,
    pub status: Option<AttendanceStatus>,
}

pub type AttendanceListQuery = ListQuery<SortableAttendanceColumn, AttendanceFilter>;

/// Per-status row totals over a filtered attendance set.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AttendanceCounts {
    pub total: u64,
    pub present: u64,
    pub absent: u64,
    pub late: u64,
    pub excused: u64,
}
