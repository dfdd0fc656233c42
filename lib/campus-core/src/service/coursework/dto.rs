use shared_types::{AssignmentId, ExamId, GroupId, StudentId, TeacherId};
use time::{Date, Time};

use crate::model::assignment::SubmissionGrade;

#[derive(Clone, Debug)]
pub struct CreateAssignmentRequest {
    pub group_id: GroupId,
    /// Defaults to the acting teacher when omitted.
    pub teacher_id: Option<TeacherId>,
    pub title: String,
    pub description: String,
    pub file_path: Option<String>,
    pub due_date: Date,
}

#[derive(Clone, Debug)]
pub struct CreateSubmissionRequest {
    pub assignment_id: AssignmentId,
    /// Defaults to the acting student when omitted.
    pub student_id: Option<StudentId>,
    pub submission_file_path: String,
}

#[derive(Clone, Debug)]
pub struct GradeSubmissionRequest {
    pub grade: SubmissionGrade,
    pub feedback: String,
}

#[derive(Clone, Debug)]
pub struct CreateExamRequest {
    pub group_id: GroupId,
    /// Defaults to the acting teacher when omitted.
    pub teacher_id: Option<TeacherId>,
    pub title: String,
    pub description: String,
    pub exam_date: Date,
    pub start_time: Time,
    pub end_time: Time,
    pub total_points: u32,
    pub passing_score: u32,
}

#[derive(Clone, Debug)]
pub struct CreateExamResultRequest {
    pub exam_id: ExamId,
    pub student_id: StudentId,
    pub score: u32,
    pub grade: String,
    pub answer_file_path: Option<String>,
}
