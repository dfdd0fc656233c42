use shared_types::{
    AssignmentId, AttendanceId, BranchId, CenterId, ContractId, ExamId, ExamResultId, GroupId,
    LeadId, LessonId, NotificationId, PaymentId, RoomId, StudentId, SubjectId, SubmissionId,
    TeacherId, UserId,
};
use thiserror::Error;

use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Mapping error: `{0}`")]
    MappingError(String),

    #[error("Not updated")]
    NotUpdated,

    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),
    #[error("Not found")]
    NotFound,

    #[error(transparent)]
    EntityAlreadyExists(#[from] EntityAlreadyExistsError),
    #[error("Already exists")]
    AlreadyExists,

    #[error(transparent)]
    BusinessLogic(#[from] BusinessLogicError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(DataLayerError),
    #[error("Response mapping error: {0}")]
    ResponseMapping(String),
}

#[derive(Debug, Error)]
pub enum EntityNotFoundError {
    #[error("Center `{0}` not found")]
    Center(CenterId),
    #[error("Branch `{0}` not found")]
    Branch(BranchId),
    #[error("Subject `{0}` not found")]
    Subject(SubjectId),
    #[error("Room `{0}` not found")]
    Room(RoomId),
    #[error("Group `{0}` not found")]
    Group(GroupId),
    #[error("Teacher `{0}` not found")]
    Teacher(TeacherId),
    #[error("Student `{0}` not found")]
    Student(StudentId),
    #[error("Lesson `{0}` not found")]
    Lesson(LessonId),
    #[error("Attendance `{0}` not found")]
    Attendance(AttendanceId),
    #[error("Payment `{0}` not found")]
    Payment(PaymentId),
    #[error("Assignment `{0}` not found")]
    Assignment(AssignmentId),
    #[error("Submission `{0}` not found")]
    Submission(SubmissionId),
    #[error("Exam `{0}` not found")]
    Exam(ExamId),
    #[error("Exam result `{0}` not found")]
    ExamResult(ExamResultId),
    #[error("Contract `{0}` not found")]
    Contract(ContractId),
    #[error("Lead `{0}` not found")]
    Lead(LeadId),
    #[error("Notification `{0}` not found")]
    Notification(NotificationId),
    #[error("User `{0}` not found")]
    User(UserId),
}

#[derive(Debug, Error)]
pub enum EntityAlreadyExistsError {
    #[error("Username `{0}` already taken")]
    Username(String),
    #[error("Receipt number `{0}` already used")]
    ReceiptNumber(String),
    #[error("Contract number `{0}` already used")]
    ContractNumber(String),
    #[error("Student `{student}` already has a result for exam `{exam}`")]
    ExamResult { exam: ExamId, student: StudentId },
    #[error("Student `{student}` already submitted for assignment `{assignment}`")]
    Submission {
        assignment: AssignmentId,
        student: StudentId,
    },
}

#[derive(Debug, Error)]
pub enum BusinessLogicError {
    #[error("Lead `{0}` is already converted")]
    LeadAlreadyConverted(LeadId),
    #[error("Group `{0}` is closed")]
    GroupClosed(GroupId),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Forbidden")]
    Forbidden,
    #[error("Performance rating `{0}` outside 0.0..=5.0")]
    RatingOutOfRange(f64),
    #[error("Score `{score}` exceeds exam total of `{total}`")]
    ScoreExceedsTotal { score: u32, total: u32 },
    #[error("Start date `{start}` is after end date `{end}`")]
    DatesReversed { start: String, end: String },
    #[error("Capacity must be greater than zero")]
    ZeroCapacity,
    #[error("Center reference required")]
    CenterRequired,
    #[error("Teacher reference required")]
    TeacherRequired,
    #[error("Student reference required")]
    StudentRequired,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    BR_0000,
    BR_0001,
    BR_0002,
    BR_0003,
    BR_0004,
    BR_0005,
    BR_0006,
    BR_0007,
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::EntityNotFound(_) | Self::NotFound => ErrorCode::BR_0001,
            Self::EntityAlreadyExists(_) | Self::AlreadyExists => ErrorCode::BR_0002,
            Self::BusinessLogic(_) => ErrorCode::BR_0003,
            Self::Validation(ValidationError::Forbidden) => ErrorCode::BR_0004,
            Self::Validation(_) => ErrorCode::BR_0005,
            Self::Repository(_) => ErrorCode::BR_0006,
            Self::MappingError(_) | Self::ResponseMapping(_) => ErrorCode::BR_0007,
            Self::NotUpdated => ErrorCode::BR_0000,
        }
    }
}

impl From<DataLayerError> for ServiceError {
    fn from(value: DataLayerError) -> Self {
        match value {
            DataLayerError::AlreadyExists => ServiceError::AlreadyExists,
            DataLayerError::RecordNotFound => ServiceError::NotFound,
            DataLayerError::RecordNotUpdated => ServiceError::NotUpdated,
            DataLayerError::IncorrectParameters
            | DataLayerError::MappingError
            | DataLayerError::Db(_)
            | DataLayerError::MissingRequiredRelation { .. } => Self::Repository(value),
        }
    }
}
