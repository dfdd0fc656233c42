use shared_types::{LessonId, StudentId};

use crate::model::attendance::AttendanceStatus;

#[derive(Clone, Debug)]
pub struct BulkMarkRequest {
    pub lesson_id: LessonId,
    pub entries: Vec<BulkMarkEntry>,
}

#[derive(Clone, Debug)]
pub struct BulkMarkEntry {
    pub student_id: StudentId,
    pub status: AttendanceStatus,
}

/// Rows actually written; entries referencing unknown students are skipped
/// and not counted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BulkMarkResponse {
    pub marked_count: u32,
}
