use shared_types::{ExamId, ExamResultId, GroupId, StudentId, TeacherId};
use time::{Date, OffsetDateTime, Time};

use super::common::ListQuery;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Exam {
    pub id: ExamId,
    pub created_date: OffsetDateTime,
    pub group_id: GroupId,
    pub teacher_id: TeacherId,
    pub title: String,
    pub description: String,
    pub exam_date: Date,
    pub start_time: Time,
    pub end_time: Time,
    pub total_points: u32,
    pub passing_score: u32,
    /// Results stay hidden from students until the teacher publishes them.
    pub results_published: bool,
}

#[derive(Clone, Debug, Default)]
pub struct UpdateExamRequest {
    pub id: ExamId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub exam_date: Option<Date>,
    pub start_time: Option<Time>,
    pub end_time: Option<Time>,
    pub total_points: Option<u32>,
    pub passing_score: Option<u32>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortableExamColumn {
    ExamDate,
    CreatedDate,
}

#[derive(Clone, Debug, Default)]
pub struct ExamFilter {
    pub group_id: Option<GroupId>,
    pub teacher_id: Option<TeacherId>,
}

pub type ExamListQuery = ListQuery<SortableExamColumn, ExamFilter>;

/// Unique per (exam, student).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExamResult {
    pub id: ExamResultId,
    pub exam_id: ExamId,
    pub student_id: StudentId,
    pub score: u32,
    pub grade: String,
    pub answer_file_path: Option<String>,
    pub submitted_at: OffsetDateTime,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortableExamResultColumn {
    Score,
    SubmittedAt,
}

#[derive(Clone, Debug, Default)]
pub struct ExamResultFilter {
    pub exam_id: Option<ExamId>,
    pub student_id: Option<StudentId>,
}

pub type ExamResultListQuery = ListQuery<SortableExamResultColumn, ExamResultFilter>;
