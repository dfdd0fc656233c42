use std::sync::Arc;

use repository::DataRepository;
use service::attendance::AttendanceService;
use service::branch::BranchService;
use service::center::CenterService;
use service::coursework::CourseworkService;
use service::enrollment::EnrollmentService;
use service::notification::NotificationService;
use service::payment::PaymentService;
use service::schedule::ScheduleService;
use service::staff::StaffService;
use service::user::UserService;

pub mod config;
pub mod model;
pub mod repository;
pub mod service;

/// Service container wired on top of a [`DataRepository`] implementation.
#[derive(Clone)]
pub struct CampusCore {
    pub center_service: CenterService,
    pub user_service: UserService,
    pub branch_service: BranchService,
    pub schedule_service: ScheduleService,
    pub staff_service: StaffService,
    pub enrollment_service: EnrollmentService,
    pub attendance_service: AttendanceService,
    pub payment_service: PaymentService,
    pub coursework_service: CourseworkService,
    pub notification_service: NotificationService,
}

impl CampusCore {
    pub fn new(data_provider: Arc<dyn DataRepository>) -> Self {
        Self {
            center_service: CenterService::new(
                data_provider.get_center_repository(),
                data_provider.get_subject_repository(),
                data_provider.get_branch_repository(),
                data_provider.get_group_repository(),
                data_provider.get_teacher_repository(),
                data_provider.get_student_repository(),
            ),
            user_service: UserService::new(
                data_provider.get_user_repository(),
                data_provider.get_teacher_repository(),
                data_provider.get_student_repository(),
            ),
            branch_service: BranchService::new(
                data_provider.get_branch_repository(),
                data_provider.get_room_repository(),
            ),
            schedule_service: ScheduleService::new(
                data_provider.get_group_repository(),
                data_provider.get_lesson_repository(),
                data_provider.get_branch_repository(),
                data_provider.get_student_repository(),
                data_provider.get_attendance_repository(),
                data_provider.get_payment_repository(),
            ),
            staff_service: StaffService::new(
                data_provider.get_teacher_repository(),
                data_provider.get_branch_repository(),
                data_provider.get_lesson_repository(),
                data_provider.get_attendance_repository(),
                data_provider.get_assignment_repository(),
                data_provider.get_exam_repository(),
            ),
            enrollment_service: EnrollmentService::new(
                data_provider.get_student_repository(),
                data_provider.get_lead_repository(),
                data_provider.get_contract_repository(),
                data_provider.get_group_repository(),
                data_provider.get_branch_repository(),
                data_provider.get_attendance_repository(),
                data_provider.get_payment_repository(),
            ),
            attendance_service: AttendanceService::new(
                data_provider.get_attendance_repository(),
                data_provider.get_lesson_repository(),
                data_provider.get_student_repository(),
            ),
            payment_service: PaymentService::new(
                data_provider.get_payment_repository(),
                data_provider.get_student_repository(),
                data_provider.get_group_repository(),
            ),
            coursework_service: CourseworkService::new(
                data_provider.get_assignment_repository(),
                data_provider.get_submission_repository(),
                data_provider.get_exam_repository(),
                data_provider.get_exam_result_repository(),
                data_provider.get_group_repository(),
                data_provider.get_student_repository(),
            ),
            notification_service: NotificationService::new(
                data_provider.get_notification_repository(),
            ),
        }
    }
}
