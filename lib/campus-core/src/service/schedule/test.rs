use std::sync::Arc;

use mockall::predicate::eq;
use shared_types::{CenterId, GroupId, LessonId};
use time::macros::date;
use uuid::Uuid;

use super::ScheduleService;
use super::dto::CreateGroupRequest;
use crate::model::attendance::AttendanceCounts;
use crate::model::common::GetListResponse;
use crate::model::lesson::UpdateLessonRequest;
use crate::model::payment::PaymentTotals;
use crate::model::scope::VisibilityScope;
use crate::model::user::Role;
use crate::repository::attendance_repository::MockAttendanceRepository;
use crate::repository::branch_repository::MockBranchRepository;
use crate::repository::group_repository::MockGroupRepository;
use crate::repository::lesson_repository::MockLessonRepository;
use crate::repository::payment_repository::MockPaymentRepository;
use crate::repository::student_repository::MockStudentRepository;
use crate::service::error::{ServiceError, ValidationError};
use crate::service::test_utilities::{
    dummy_branch, dummy_group, dummy_lesson, dummy_principal,
};

fn setup_service(
    group_repository: MockGroupRepository,
    lesson_repository: MockLessonRepository,
    branch_repository: MockBranchRepository,
) -> ScheduleService {
    ScheduleService::new(
        Arc::new(group_repository),
        Arc::new(lesson_repository),
        Arc::new(branch_repository),
        Arc::new(MockStudentRepository::default()),
        Arc::new(MockAttendanceRepository::default()),
        Arc::new(MockPaymentRepository::default()),
    )
}

#[tokio::test]
async fn test_create_group_inherits_tenant_from_branch() {
    let center_id: CenterId = Uuid::new_v4().into();
    let branch_id = Uuid::new_v4().into();

    let mut branch_repository = MockBranchRepository::default();
    branch_repository
        .expect_get_branch()
        .with(eq(branch_id), eq(VisibilityScope::Center(center_id)))
        .once()
        .returning(move |id, _| Ok(Some(dummy_branch(*id, center_id))));

    let mut group_repository = MockGroupRepository::default();
    group_repository
        .expect_create_group()
        .withf(move |group| group.center_id == center_id && group.branch_id == branch_id)
        .once()
        .returning(|group| Ok(group.id));

    let service = setup_service(
        group_repository,
        MockLessonRepository::default(),
        branch_repository,
    );
    let principal = dummy_principal(Role::Manager, Some(center_id));

    service
        .create_group(
            &principal,
            CreateGroupRequest {
                branch_id,
                subject_id: Uuid::new_v4().into(),
                teacher_id: None,
                room_id: None,
                name: "Evening group".to_string(),
                capacity: 20,
                start_date: date!(2024 - 09 - 01),
                end_date: date!(2025 - 05 - 31),
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_group_rejects_reversed_dates() {
    let service = setup_service(
        MockGroupRepository::default(),
        MockLessonRepository::default(),
        MockBranchRepository::default(),
    );
    let principal = dummy_principal(Role::Manager, Some(Uuid::new_v4().into()));

    let result = service
        .create_group(
            &principal,
            CreateGroupRequest {
                branch_id: Uuid::new_v4().into(),
                subject_id: Uuid::new_v4().into(),
                teacher_id: None,
                room_id: None,
                name: "Backwards".to_string(),
                capacity: 10,
                start_date: date!(2025 - 05 - 31),
                end_date: date!(2024 - 09 - 01),
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(ServiceError::Validation(ValidationError::DatesReversed { .. }))
    ));
}

#[tokio::test]
async fn test_cancel_cancelled_lesson_is_noop() {
    let lesson_id: LessonId = Uuid::new_v4().into();
    let group_id: GroupId = Uuid::new_v4().into();

    let mut lesson_repository = MockLessonRepository::default();
    lesson_repository
        .expect_get_lesson()
        .once()
        .returning(move |id, _| {
            let mut lesson = dummy_lesson(*id, group_id, None);
            lesson.is_cancelled = true;
            Ok(Some(lesson))
        });
    // no update expected

    let service = setup_service(
        MockGroupRepository::default(),
        lesson_repository,
        MockBranchRepository::default(),
    );
    let principal = dummy_principal(Role::SuperAdmin, None);

    service.cancel_lesson(&principal, &lesson_id).await.unwrap();
}

#[tokio::test]
async fn test_generate_online_link_persists_link() {
    let lesson_id: LessonId = Uuid::new_v4().into();
    let group_id: GroupId = Uuid::new_v4().into();

    let mut lesson_repository = MockLessonRepository::default();
    lesson_repository
        .expect_get_lesson()
        .once()
        .returning(move |id, _| Ok(Some(dummy_lesson(*id, group_id, None))));
    lesson_repository
        .expect_update_lesson()
        .withf(|request: &UpdateLessonRequest| {
            request
                .online_link
                .as_deref()
                .is_some_and(|link| link.starts_with("https://meet.example.com/"))
        })
        .once()
        .returning(|_| Ok(()));

    let service = setup_service(
        MockGroupRepository::default(),
        lesson_repository,
        MockBranchRepository::default(),
    );
    let principal = dummy_principal(Role::SuperAdmin, None);

    let response = service
        .generate_online_link(&principal, &lesson_id)
        .await
        .unwrap();
    assert!(response.online_link.starts_with("https://meet.example.com/"));
}

#[tokio::test]
async fn test_group_statistics_aggregates_attendance_and_payments() {
    let group_id: GroupId = Uuid::new_v4().into();
    let center_id: CenterId = Uuid::new_v4().into();

    let mut group_repository = MockGroupRepository::default();
    group_repository
        .expect_get_group()
        .once()
        .returning(move |id, _| Ok(Some(dummy_group(*id, center_id, Uuid::new_v4().into()))));

    let mut student_repository = MockStudentRepository::default();
    student_repository
        .expect_get_student_list()
        .withf(move |query, _| {
            query.filtering.as_ref().and_then(|filter| filter.group_id) == Some(group_id)
        })
        .once()
        .returning(|_, _| {
            Ok(GetListResponse {
                values: vec![],
                total_pages: 1,
                total_items: 12,
            })
        });

    let mut lesson_repository = MockLessonRepository::default();
    lesson_repository
        .expect_get_lesson_list()
        .withf(move |query, _| {
            query.filtering.as_ref().and_then(|filter| filter.group_id) == Some(group_id)
        })
        .once()
        .returning(|_, _| {
            Ok(GetListResponse {
                values: vec![],
                total_pages: 1,
                total_items: 40,
            })
        });

    let mut attendance_repository = MockAttendanceRepository::default();
    attendance_repository
        .expect_get_attendance_counts()
        .withf(move |filter, _| filter.group_id == Some(group_id))
        .once()
        .returning(|_, _| {
            Ok(AttendanceCounts {
                total: 80,
                present: 60,
                absent: 10,
                late: 6,
                excused: 4,
            })
        });

    let mut payment_repository = MockPaymentRepository::default();
    payment_repository
        .expect_get_payment_totals()
        .withf(move |filter, _| filter.group_id == Some(group_id))
        .once()
        .returning(|_, _| {
            Ok(PaymentTotals {
                amount: 500_000,
                count: 5,
            })
        });

    let service = ScheduleService::new(
        Arc::new(group_repository),
        Arc::new(lesson_repository),
        Arc::new(MockBranchRepository::default()),
        Arc::new(student_repository),
        Arc::new(attendance_repository),
        Arc::new(payment_repository),
    );
    let principal = dummy_principal(Role::Manager, Some(center_id));

    let statistics = service
        .get_group_statistics(&principal, &group_id)
        .await
        .unwrap();
    assert_eq!(statistics.students, 12);
    assert_eq!(statistics.lessons, 40);
    assert_eq!(statistics.average_attendance, 75.0);
    assert_eq!(statistics.payments_total, 500_000);
    assert_eq!(statistics.payments_count, 5);
}

#[tokio::test]
async fn test_group_attendance_report_breaks_totals_down_by_status() {
    let group_id: GroupId = Uuid::new_v4().into();
    let center_id: CenterId = Uuid::new_v4().into();

    let mut group_repository = MockGroupRepository::default();
    group_repository
        .expect_get_group()
        .once()
        .returning(move |id, _| Ok(Some(dummy_group(*id, center_id, Uuid::new_v4().into()))));

    let mut lesson_repository = MockLessonRepository::default();
    lesson_repository
        .expect_get_lesson_list()
        .once()
        .returning(|_, _| {
            Ok(GetListResponse {
                values: vec![],
                total_pages: 1,
                total_items: 18,
            })
        });

    let mut attendance_repository = MockAttendanceRepository::default();
    attendance_repository
        .expect_get_attendance_counts()
        .once()
        .returning(|_, _| {
            Ok(AttendanceCounts {
                total: 50,
                present: 41,
                absent: 5,
                late: 3,
                excused: 1,
            })
        });

    let service = ScheduleService::new(
        Arc::new(group_repository),
        Arc::new(lesson_repository),
        Arc::new(MockBranchRepository::default()),
        Arc::new(MockStudentRepository::default()),
        Arc::new(attendance_repository),
        Arc::new(MockPaymentRepository::default()),
    );
    let principal = dummy_principal(Role::Manager, Some(center_id));

    let report = service
        .get_group_attendance_report(&principal, &group_id)
        .await
        .unwrap();
    assert_eq!(report.total_lessons, 18);
    assert_eq!(report.total_attendances, 50);
    assert_eq!(report.present, 41);
    assert_eq!(report.absent, 5);
    assert_eq!(report.late, 3);
}

#[tokio::test]
async fn test_group_statistics_without_attendance_average_to_zero() {
    let group_id: GroupId = Uuid::new_v4().into();
    let center_id: CenterId = Uuid::new_v4().into();

    let mut group_repository = MockGroupRepository::default();
    group_repository
        .expect_get_group()
        .once()
        .returning(move |id, _| Ok(Some(dummy_group(*id, center_id, Uuid::new_v4().into()))));

    let mut student_repository = MockStudentRepository::default();
    student_repository
        .expect_get_student_list()
        .once()
        .returning(|_, _| {
            Ok(GetListResponse {
                values: vec![],
                total_pages: 0,
                total_items: 0,
            })
        });

    let mut lesson_repository = MockLessonRepository::default();
    lesson_repository
        .expect_get_lesson_list()
        .once()
        .returning(|_, _| {
            Ok(GetListResponse {
                values: vec![],
                total_pages: 0,
                total_items: 0,
            })
        });

    let mut attendance_repository = MockAttendanceRepository::default();
    attendance_repository
        .expect_get_attendance_counts()
        .once()
        .returning(|_, _| Ok(AttendanceCounts::default()));

    let mut payment_repository = MockPaymentRepository::default();
    payment_repository
        .expect_get_payment_totals()
        .once()
        .returning(|_, _| Ok(PaymentTotals::default()));

    let service = ScheduleService::new(
        Arc::new(group_repository),
        Arc::new(lesson_repository),
        Arc::new(MockBranchRepository::default()),
        Arc::new(student_repository),
        Arc::new(attendance_repository),
        Arc::new(payment_repository),
    );
    let principal = dummy_principal(Role::Manager, Some(center_id));

    let statistics = service
        .get_group_statistics(&principal, &group_id)
        .await
        .unwrap();
    assert_eq!(statistics.average_attendance, 0.0);
}
