use shared_types::{AssignmentId, GroupId, StudentId, SubmissionId, TeacherId};
use strum::{Display, EnumString};
use time::{Date, OffsetDateTime};

use super::common::ListQuery;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, EnumString)]
pub enum AssignmentStatus {
    Assigned,
    Submitted,
    Graded,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Assignment {
    pub id: AssignmentId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub group_id: GroupId,
    pub teacher_id: TeacherId,
    pub title: String,
    pub description: String,
    pub file_path: Option<String>,
    pub due_date: Date,
    pub status: AssignmentStatus,
}

#[derive(Clone, Debug, Default)]
pub struct UpdateAssignmentRequest {
    pub id: AssignmentId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<Date>,
    pub status: Option<AssignmentStatus>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortableAssignmentColumn {
    DueDate,
    CreatedDate,
}

#[derive(Clone, Debug, Default)]
pub struct AssignmentFilter {
    pub group_id: Option<GroupId>,
    pub teacher_id: Option<TeacherId>,
    pub status: Option<AssignmentStatus>,
}

pub type AssignmentListQuery = ListQuery<SortableAssignmentColumn, AssignmentFilter>;

/// Letter grade for graded submissions.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, EnumString)]
pub enum SubmissionGrade {
    A,
    B,
    C,
    D,
    F,
}

/// Unique per (assignment, student).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssignmentSubmission {
    pub id: SubmissionId,
    pub assignment_id: AssignmentId,
    pub student_id: StudentId,
    pub submission_file_path: String,
    pub submitted_at: OffsetDateTime,
    pub grade: Option<SubmissionGrade>,
    pub feedback: String,
    pub graded_at: Option<OffsetDateTime>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortableSubmissionColumn {
    SubmittedAt,
}

#[derive(Clone, Debug, Default)]
pub struct SubmissionFilter {
    pub assignment_id: Option<AssignmentId>,
    pub student_id: Option<StudentId>,
    pub graded: Option<bool>,
}

pub type SubmissionListQuery = ListQuery<SortableSubmissionColumn, SubmissionFilter>;
