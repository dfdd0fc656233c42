pub mod error;

pub mod assignment_repository;
pub mod attendance_repository;
pub mod branch_repository;
pub mod center_repository;
pub mod contract_repository;
pub mod exam_repository;
pub mod exam_result_repository;
pub mod group_repository;
pub mod lead_repository;
pub mod lesson_repository;
pub mod notification_repository;
pub mod payment_repository;
pub mod room_repository;
pub mod student_repository;
pub mod subject_repository;
pub mod submission_repository;
pub mod teacher_repository;
pub mod user_repository;

use std::sync::Arc;

use assignment_repository::AssignmentRepository;
use attendance_repository::AttendanceRepository;
use branch_repository::BranchRepository;
use center_repository::CenterRepository;
use contract_repository::ContractRepository;
use exam_repository::ExamRepository;
use exam_result_repository::ExamResultRepository;
use group_repository::GroupRepository;
use lead_repository::LeadRepository;
use lesson_repository::LessonRepository;
use notification_repository::NotificationRepository;
use payment_repository::PaymentRepository;
use room_repository::RoomRepository;
use student_repository::StudentRepository;
use subject_repository::SubjectRepository;
use submission_repository::SubmissionRepository;
use teacher_repository::TeacherRepository;
use user_repository::UserRepository;

pub trait DataRepository: Send + Sync {
    fn get_center_repository(&self) -> Arc<dyn CenterRepository>;
    fn get_subject_repository(&self) -> Arc<dyn SubjectRepository>;
    fn get_branch_repository(&self) -> Arc<dyn BranchRepository>;
    fn get_room_repository(&self) -> Arc<dyn RoomRepository>;
    fn get_group_repository(&self) -> Arc<dyn GroupRepository>;
    fn get_teacher_repository(&self) -> Arc<dyn TeacherRepository>;
    fn get_student_repository(&self) -> Arc<dyn StudentRepository>;
    fn get_lesson_repository(&self) -> Arc<dyn LessonRepository>;
    fn get_attendance_repository(&self) -> Arc<dyn AttendanceRepository>;
    fn get_payment_repository(&self) -> Arc<dyn PaymentRepository>;
    fn get_assignment_repository(&self) -> Arc<dyn AssignmentRepository>;
    fn get_submission_repository(&self) -> Arc<dyn SubmissionRepository>;
    fn get_exam_repository(&self) -> Arc<dyn ExamRepository>;
    fn get_exam_result_repository(&self) -> Arc<dyn ExamResultRepository>;
    fn get_contract_repository(&self) -> Arc<dyn ContractRepository>;
    fn get_lead_repository(&self) -> Arc<dyn LeadRepository>;
    fn get_notification_repository(&self) -> Arc<dyn NotificationRepository>;
    fn get_user_repository(&self) -> Arc<dyn UserRepository>;
}
