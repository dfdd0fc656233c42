use std::sync::Arc;

use shared_types::TeacherId;
use time::OffsetDateTime;
use time::macros::date;
use uuid::Uuid;

use super::StaffService;
use crate::model::attendance::AttendanceCounts;
use crate::model::common::GetListResponse;
use crate::model::teacher::{PersonStatus, Teacher, UpdateTeacherRequest};
use crate::model::user::Role;
use crate::repository::assignment_repository::MockAssignmentRepository;
use crate::repository::attendance_repository::MockAttendanceRepository;
use crate::repository::branch_repository::MockBranchRepository;
use crate::repository::exam_repository::MockExamRepository;
use crate::repository::lesson_repository::MockLessonRepository;
use crate::repository::teacher_repository::MockTeacherRepository;
use crate::service::error::{ServiceError, ValidationError};
use crate::service::test_utilities::{dummy_lesson, dummy_principal};

fn dummy_teacher(id: TeacherId) -> Teacher {
    let now = OffsetDateTime::now_utc();
    Teacher {
        id,
        created_date: now,
        last_modified: now,
        user_id: Uuid::new_v4().into(),
        branch_id: Uuid::new_v4().into(),
        status: PersonStatus::Active,
        phone: String::new(),
        date_of_birth: None,
        specialization: "Maths".to_string(),
        qualification: String::new(),
        performance_rating: 0.0,
        hire_date: date!(2023 - 01 - 10),
        hourly_rate: 0,
        address: String::new(),
        passport_number: None,
    }
}

fn setup_service(teacher_repository: MockTeacherRepository) -> StaffService {
    StaffService::new(
        Arc::new(teacher_repository),
        Arc::new(MockBranchRepository::default()),
        Arc::new(MockLessonRepository::default()),
        Arc::new(MockAttendanceRepository::default()),
        Arc::new(MockAssignmentRepository::default()),
        Arc::new(MockExamRepository::default()),
    )
}

#[tokio::test]
async fn test_rate_teacher_success() {
    let teacher_id: TeacherId = Uuid::new_v4().into();
    let mut teacher_repository = MockTeacherRepository::default();
    teacher_repository
        .expect_get_teacher()
        .once()
        .returning(move |id, _| Ok(Some(dummy_teacher(*id))));
    teacher_repository
        .expect_update_teacher()
        .withf(|request: &UpdateTeacherRequest| request.performance_rating == Some(4.5))
        .once()
        .returning(|_| Ok(()));

    let service = setup_service(teacher_repository);
    let principal = dummy_principal(Role::Director, Some(Uuid::new_v4().into()));

    service
        .rate_teacher(&principal, &teacher_id, 4.5)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_rate_teacher_rejects_out_of_range() {
    let teacher_id: TeacherId = Uuid::new_v4().into();
    let service = setup_service(MockTeacherRepository::default());
    let principal = dummy_principal(Role::Director, Some(Uuid::new_v4().into()));

    for rating in [-0.1, 5.1] {
        let result = service.rate_teacher(&principal, &teacher_id, rating).await;
        assert!(matches!(
            result,
            Err(ServiceError::Validation(
                ValidationError::RatingOutOfRange(_)
            ))
        ));
    }
}

#[tokio::test]
async fn test_block_blocked_teacher_is_noop() {
    let teacher_id: TeacherId = Uuid::new_v4().into();
    let mut teacher_repository = MockTeacherRepository::default();
    teacher_repository
        .expect_get_teacher()
        .once()
        .returning(move |id, _| {
            let mut teacher = dummy_teacher(*id);
            teacher.status = PersonStatus::Blocked;
            Ok(Some(teacher))
        });
    // no update expected

    let service = setup_service(teacher_repository);
    let principal = dummy_principal(Role::SuperAdmin, None);

    service
        .block_teacher(&principal, &teacher_id)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_students_cannot_rate() {
    let teacher_id: TeacherId = Uuid::new_v4().into();
    let service = setup_service(MockTeacherRepository::default());
    let principal = dummy_principal(Role::Student, None);

    let result = service.rate_teacher(&principal, &teacher_id, 3.0).await;
    assert!(matches!(
        result,
        Err(ServiceError::Validation(ValidationError::Forbidden))
    ));
}

#[tokio::test]
async fn test_teacher_schedule_is_ordered_lesson_list() {
    let teacher_id: TeacherId = Uuid::new_v4().into();

    let mut teacher_repository = MockTeacherRepository::default();
    teacher_repository
        .expect_get_teacher()
        .once()
        .returning(move |id, _| Ok(Some(dummy_teacher(*id))));

    let mut lesson_repository = MockLessonRepository::default();
    lesson_repository
        .expect_get_teacher_schedule()
        .withf(move |id, _| *id == teacher_id)
        .once()
        .returning(move |id, _| {
            Ok(vec![
                dummy_lesson(Uuid::new_v4().into(), Uuid::new_v4().into(), Some(*id)),
                dummy_lesson(Uuid::new_v4().into(), Uuid::new_v4().into(), Some(*id)),
            ])
        });

    let service = StaffService::new(
        Arc::new(teacher_repository),
        Arc::new(MockBranchRepository::default()),
        Arc::new(lesson_repository),
        Arc::new(MockAttendanceRepository::default()),
        Arc::new(MockAssignmentRepository::default()),
        Arc::new(MockExamRepository::default()),
    );
    let principal = dummy_principal(Role::Director, Some(Uuid::new_v4().into()));

    let schedule = service
        .get_teacher_schedule(&principal, &teacher_id)
        .await
        .unwrap();
    assert_eq!(schedule.total_items, 2);
    assert_eq!(schedule.values.len(), 2);
}

#[tokio::test]
async fn test_teacher_performance_collects_workload_counters() {
    let teacher_id: TeacherId = Uuid::new_v4().into();

    let mut teacher_repository = MockTeacherRepository::default();
    teacher_repository
        .expect_get_teacher()
        .once()
        .returning(move |id, _| {
            let mut teacher = dummy_teacher(*id);
            teacher.performance_rating = 4.5;
            Ok(Some(teacher))
        });

    let mut lesson_repository = MockLessonRepository::default();
    lesson_repository
        .expect_get_lesson_list()
        .withf(move |query, _| {
            query.filtering.as_ref().and_then(|filter| filter.teacher_id) == Some(teacher_id)
        })
        .once()
        .returning(|_, _| {
            Ok(GetListResponse {
                values: vec![],
                total_pages: 1,
                total_items: 10,
            })
        });

    let mut attendance_repository = MockAttendanceRepository::default();
    attendance_repository
        .expect_get_attendance_counts()
        .withf(move |filter, _| filter.marked_by_id == Some(teacher_id))
        .once()
        .returning(|_, _| {
            Ok(AttendanceCounts {
                total: 55,
                present: 40,
                absent: 10,
                late: 5,
                excused: 0,
            })
        });

    let mut assignment_repository = MockAssignmentRepository::default();
    assignment_repository
        .expect_get_assignment_list()
        .withf(move |query, _| {
            query.filtering.as_ref().and_then(|filter| filter.teacher_id) == Some(teacher_id)
        })
        .once()
        .returning(|_, _| {
            Ok(GetListResponse {
                values: vec![],
                total_pages: 1,
                total_items: 7,
            })
        });

    let mut exam_repository = MockExamRepository::default();
    exam_repository
        .expect_get_exam_list()
        .withf(move |query, _| {
            query.filtering.as_ref().and_then(|filter| filter.teacher_id) == Some(teacher_id)
        })
        .once()
        .returning(|_, _| {
            Ok(GetListResponse {
                values: vec![],
                total_pages: 1,
                total_items: 3,
            })
        });

    let service = StaffService::new(
        Arc::new(teacher_repository),
        Arc::new(MockBranchRepository::default()),
        Arc::new(lesson_repository),
        Arc::new(attendance_repository),
        Arc::new(assignment_repository),
        Arc::new(exam_repository),
    );
    let principal = dummy_principal(Role::Director, Some(Uuid::new_v4().into()));

    let performance = service
        .get_teacher_performance(&principal, &teacher_id)
        .await
        .unwrap();
    assert_eq!(performance.lessons, 10);
    assert_eq!(performance.attendances_marked, 55);
    assert_eq!(performance.assignments, 7);
    assert_eq!(performance.exams, 3);
    assert_eq!(performance.performance_rating, 4.5);
}
