use std::sync::Arc;

use mockall::predicate::eq;
use shared_types::{CenterId, GroupId, LessonId, StudentId, TeacherId};
use uuid::Uuid;

use super::AttendanceService;
use super::dto::{BulkMarkEntry, BulkMarkRequest};
use crate::model::attendance::AttendanceStatus;
use crate::model::scope::VisibilityScope;
use crate::model::user::Role;
use crate::repository::attendance_repository::MockAttendanceRepository;
use crate::repository::lesson_repository::MockLessonRepository;
use crate::repository::student_repository::MockStudentRepository;
use crate::service::error::{EntityNotFoundError, ServiceError};
use crate::service::test_utilities::{
    dummy_lesson, dummy_principal, dummy_student, teacher_principal,
};

fn setup_service(
    attendance_repository: MockAttendanceRepository,
    lesson_repository: MockLessonRepository,
    student_repository: MockStudentRepository,
) -> AttendanceService {
    AttendanceService::new(
        Arc::new(attendance_repository),
        Arc::new(lesson_repository),
        Arc::new(student_repository),
    )
}

fn request(lesson_id: LessonId, students: &[(StudentId, AttendanceStatus)]) -> BulkMarkRequest {
    BulkMarkRequest {
        lesson_id,
        entries: students
            .iter()
            .map(|(student_id, status)| BulkMarkEntry {
                student_id: *student_id,
                status: *status,
            })
            .collect(),
    }
}

#[tokio::test]
async fn test_bulk_mark_unknown_lesson_writes_nothing() {
    let lesson_id: LessonId = Uuid::new_v4().into();

    let mut lesson_repository = MockLessonRepository::default();
    lesson_repository
        .expect_get_lesson()
        .with(eq(lesson_id), eq(VisibilityScope::Unrestricted))
        .once()
        .returning(|_, _| Ok(None));
    // attendance repository must never be touched

    let service = setup_service(
        MockAttendanceRepository::default(),
        lesson_repository,
        MockStudentRepository::default(),
    );
    let principal = dummy_principal(Role::SuperAdmin, None);

    let result = service
        .bulk_mark(
            &principal,
            request(lesson_id, &[(Uuid::new_v4().into(), AttendanceStatus::Present)]),
        )
        .await;
    assert!(matches!(
        result,
        Err(ServiceError::EntityNotFound(EntityNotFoundError::Lesson(_)))
    ));
}

#[tokio::test]
async fn test_bulk_mark_skips_unknown_students() {
    let lesson_id: LessonId = Uuid::new_v4().into();
    let group_id: GroupId = Uuid::new_v4().into();
    let known_student: StudentId = Uuid::new_v4().into();
    let unknown_student: StudentId = Uuid::new_v4().into();

    let mut lesson_repository = MockLessonRepository::default();
    lesson_repository
        .expect_get_lesson()
        .once()
        .returning(move |id, _| Ok(Some(dummy_lesson(*id, group_id, None))));

    let mut student_repository = MockStudentRepository::default();
    student_repository
        .expect_get_student()
        .withf(move |id, _| *id == known_student)
        .once()
        .returning(|id, _| Ok(Some(dummy_student(*id, Uuid::new_v4().into()))));
    student_repository
        .expect_get_student()
        .withf(move |id, _| *id == unknown_student)
        .once()
        .returning(|_, _| Ok(None));

    let mut attendance_repository = MockAttendanceRepository::default();
    attendance_repository
        .expect_mark_attendance()
        .withf(move |_, student_id, status, _| {
            *student_id == known_student && *status == AttendanceStatus::Present
        })
        .once()
        .returning(|_, _, _, _| Ok(Uuid::new_v4().into()));

    let service = setup_service(attendance_repository, lesson_repository, student_repository);
    let principal = dummy_principal(Role::SuperAdmin, None);

    let response = service
        .bulk_mark(
            &principal,
            request(
                lesson_id,
                &[
                    (known_student, AttendanceStatus::Present),
                    (unknown_student, AttendanceStatus::Absent),
                ],
            ),
        )
        .await
        .unwrap();
    assert_eq!(response.marked_count, 1);
}

#[tokio::test]
async fn test_bulk_mark_records_acting_teacher_as_marker() {
    let lesson_id: LessonId = Uuid::new_v4().into();
    let group_id: GroupId = Uuid::new_v4().into();
    let teacher_id: TeacherId = Uuid::new_v4().into();
    let center_id: CenterId = Uuid::new_v4().into();
    let student_id: StudentId = Uuid::new_v4().into();

    let mut lesson_repository = MockLessonRepository::default();
    lesson_repository
        .expect_get_lesson()
        .with(eq(lesson_id), eq(VisibilityScope::TeacherOwned(teacher_id)))
        .once()
        .returning(move |id, _| Ok(Some(dummy_lesson(*id, group_id, None))));

    let mut student_repository = MockStudentRepository::default();
    student_repository
        .expect_get_student()
        .once()
        .returning(|id, _| Ok(Some(dummy_student(*id, Uuid::new_v4().into()))));

    let mut attendance_repository = MockAttendanceRepository::default();
    attendance_repository
        .expect_mark_attendance()
        .withf(move |_, _, _, marked_by| *marked_by == Some(teacher_id))
        .once()
        .returning(|_, _, _, _| Ok(Uuid::new_v4().into()));

    let service = setup_service(attendance_repository, lesson_repository, student_repository);
    let principal = teacher_principal(teacher_id, center_id);

    let response = service
        .bulk_mark(
            &principal,
            request(lesson_id, &[(student_id, AttendanceStatus::Late)]),
        )
        .await
        .unwrap();
    assert_eq!(response.marked_count, 1);
}

#[tokio::test]
async fn test_bulk_mark_by_staff_leaves_marker_empty() {
    let lesson_id: LessonId = Uuid::new_v4().into();
    let group_id: GroupId = Uuid::new_v4().into();
    let lesson_teacher_id: TeacherId = Uuid::new_v4().into();
    let student_id: StudentId = Uuid::new_v4().into();

    let mut lesson_repository = MockLessonRepository::default();
    lesson_repository
        .expect_get_lesson()
        .once()
        .returning(move |id, _| Ok(Some(dummy_lesson(*id, group_id, Some(lesson_teacher_id)))));

    let mut student_repository = MockStudentRepository::default();
    student_repository
        .expect_get_student()
        .once()
        .returning(|id, _| Ok(Some(dummy_student(*id, Uuid::new_v4().into()))));

    // an admin is not a teacher, so no marker is recorded even though the
    // lesson has an assigned teacher
    let mut attendance_repository = MockAttendanceRepository::default();
    attendance_repository
        .expect_mark_attendance()
        .withf(|_, _, _, marked_by| marked_by.is_none())
        .once()
        .returning(|_, _, _, _| Ok(Uuid::new_v4().into()));

    let service = setup_service(attendance_repository, lesson_repository, student_repository);
    let principal = dummy_principal(Role::Admin, Some(Uuid::new_v4().into()));

    let response = service
        .bulk_mark(
            &principal,
            request(lesson_id, &[(student_id, AttendanceStatus::Present)]),
        )
        .await
        .unwrap();
    assert_eq!(response.marked_count, 1);
}
