use std::sync::Arc;

use campus_core::repository::DataRepository;
use campus_core::repository::assignment_repository::AssignmentRepository;
use campus_core::repository::attendance_repository::AttendanceRepository;
use campus_core::repository::branch_repository::BranchRepository;
use campus_core::repository::center_repository::CenterRepository;
use campus_core::repository::contract_repository::ContractRepository;
use campus_core::repository::exam_repository::ExamRepository;
use campus_core::repository::exam_result_repository::ExamResultRepository;
use campus_core::repository::group_repository::GroupRepository;
use campus_core::repository::lead_repository::LeadRepository;
use campus_core::repository::lesson_repository::LessonRepository;
use campus_core::repository::notification_repository::NotificationRepository;
use campus_core::repository::payment_repository::PaymentRepository;
use campus_core::repository::room_repository::RoomRepository;
use campus_core::repository::student_repository::StudentRepository;
use campus_core::repository::subject_repository::SubjectRepository;
use campus_core::repository::submission_repository::SubmissionRepository;
use campus_core::repository::teacher_repository::TeacherRepository;
use campus_core::repository::user_repository::UserRepository;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};

use crate::assignment::AssignmentProvider;
use crate::attendance::AttendanceProvider;
use crate::branch::BranchProvider;
use crate::center::CenterProvider;
use crate::contract::ContractProvider;
use crate::exam::ExamProvider;
use crate::exam_result::ExamResultProvider;
use crate::group::GroupProvider;
use crate::lead::LeadProvider;
use crate::lesson::LessonProvider;
use crate::notification::NotificationProvider;
use crate::payment::PaymentProvider;
use crate::room::RoomProvider;
use crate::student::StudentProvider;
use crate::subject::SubjectProvider;
use crate::submission::SubmissionProvider;
use crate::teacher::TeacherProvider;
use crate::user::UserProvider;

mod entity;
mod list_query;
mod mapper;
mod scope;

pub mod assignment;
pub mod attendance;
pub mod branch;
pub mod center;
pub mod contract;
pub mod exam;
pub mod exam_result;
pub mod group;
pub mod lead;
pub mod lesson;
pub mod notification;
pub mod payment;
pub mod room;
pub mod student;
pub mod subject;
pub mod submission;
pub mod teacher;
pub mod user;

#[cfg(test)]
mod test_utilities;

pub type DbConn = DatabaseConnection;

/// Connects and brings the schema up to date.
pub async fn db_conn(
    database_url: impl Into<ConnectOptions>,
) -> Result<DatabaseConnection, DbErr> {
    let db = sea_orm::Database::connect(database_url).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

#[derive(Clone)]
pub struct DataLayer {
    // Kept for test setups that need raw access
    #[allow(unused)]
    db: DatabaseConnection,
    center_repository: Arc<dyn CenterRepository>,
    subject_repository: Arc<dyn SubjectRepository>,
    branch_repository: Arc<dyn BranchRepository>,
    room_repository: Arc<dyn RoomRepository>,
    group_repository: Arc<dyn GroupRepository>,
    teacher_repository: Arc<dyn TeacherRepository>,
    student_repository: Arc<dyn StudentRepository>,
    lesson_repository: Arc<dyn LessonRepository>,
    attendance_repository: Arc<dyn AttendanceRepository>,
    payment_repository: Arc<dyn PaymentRepository>,
    assignment_repository: Arc<dyn AssignmentRepository>,
    submission_repository: Arc<dyn SubmissionRepository>,
    exam_repository: Arc<dyn ExamRepository>,
    exam_result_repository: Arc<dyn ExamResultRepository>,
    contract_repository: Arc<dyn ContractRepository>,
    lead_repository: Arc<dyn LeadRepository>,
    notification_repository: Arc<dyn NotificationRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl DataLayer {
    pub fn build(db: DatabaseConnection) -> Self {
        Self {
            center_repository: Arc::new(CenterProvider { db: db.clone() }),
            subject_repository: Arc::new(SubjectProvider { db: db.clone() }),
            branch_repository: Arc::new(BranchProvider { db: db.clone() }),
            room_repository: Arc::new(RoomProvider { db: db.clone() }),
            group_repository: Arc::new(GroupProvider { db: db.clone() }),
            teacher_repository: Arc::new(TeacherProvider { db: db.clone() }),
            student_repository: Arc::new(StudentProvider { db: db.clone() }),
            lesson_repository: Arc::new(LessonProvider { db: db.clone() }),
            attendance_repository: Arc::new(AttendanceProvider { db: db.clone() }),
            payment_repository: Arc::new(PaymentProvider { db: db.clone() }),
            assignment_repository: Arc::new(AssignmentProvider { db: db.clone() }),
            submission_repository: Arc::new(SubmissionProvider { db: db.clone() }),
            exam_repository: Arc::new(ExamProvider { db: db.clone() }),
            exam_result_repository: Arc::new(ExamResultProvider { db: db.clone() }),
            contract_repository: Arc::new(ContractProvider { db: db.clone() }),
            lead_repository: Arc::new(LeadProvider { db: db.clone() }),
            notification_repository: Arc::new(NotificationProvider { db: db.clone() }),
            user_repository: Arc::new(UserProvider { db: db.clone() }),
            db,
        }
    }
}

impl DataRepository for DataLayer {
    fn get_center_repository(&self) -> Arc<dyn CenterRepository> {
        self.center_repository.clone()
    }
    fn get_subject_repository(&self) -> Arc<dyn SubjectRepository> {
        self.subject_repository.clone()
    }
    fn get_branch_repository(&self) -> Arc<dyn BranchRepository> {
        self.branch_repository.clone()
    }
    fn get_room_repository(&self) -> Arc<dyn RoomRepository> {
        self.room_repository.clone()
    }
    fn get_group_repository(&self) -> Arc<dyn GroupRepository> {
        self.group_repository.clone()
    }
    fn get_teacher_repository(&self) -> Arc<dyn TeacherRepository> {
        self.teacher_repository.clone()
    }
    fn get_student_repository(&self) -> Arc<dyn StudentRepository> {
        self.student_repository.clone()
    }
    fn get_lesson_repository(&self) -> Arc<dyn LessonRepository> {
        self.lesson_repository.clone()
    }
    fn get_attendance_repository(&self) -> Arc<dyn AttendanceRepository> {
        self.attendance_repository.clone()
    }
    fn get_payment_repository(&self) -> Arc<dyn PaymentRepository> {
        self.payment_repository.clone()
    }
    fn get_assignment_repository(&self) -> Arc<dyn AssignmentRepository> {
        self.assignment_repository.clone()
    }
    fn get_submission_repository(&self) -> Arc<dyn SubmissionRepository> {
        self.submission_repository.clone()
    }
    fn get_exam_repository(&self) -> Arc<dyn ExamRepository> {
        self.exam_repository.clone()
    }
    fn get_exam_result_repository(&self) -> Arc<dyn ExamResultRepository> {
        self.exam_result_repository.clone()
    }
    fn get_contract_repository(&self) -> Arc<dyn ContractRepository> {
        self.contract_repository.clone()
    }
    fn get_lead_repository(&self) -> Arc<dyn LeadRepository> {
        self.lead_repository.clone()
    }
    fn get_notification_repository(&self) -> Arc<dyn NotificationRepository> {
        self.notification_repository.clone()
    }
    fn get_user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }
}
