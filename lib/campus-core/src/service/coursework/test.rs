use std::sync::Arc;

use shared_types::{ExamId, StudentId};
use time::OffsetDateTime;
use time::macros::{date, time};
use uuid::Uuid;

use super::CourseworkService;
use super::dto::CreateExamResultRequest;
use crate::model::exam::Exam;
use crate::model::user::Role;
use crate::repository::assignment_repository::MockAssignmentRepository;
use crate::repository::error::DataLayerError;
use crate::repository::exam_repository::MockExamRepository;
use crate::repository::exam_result_repository::MockExamResultRepository;
use crate::repository::group_repository::MockGroupRepository;
use crate::repository::student_repository::MockStudentRepository;
use crate::repository::submission_repository::MockSubmissionRepository;
use crate::service::error::{
    EntityAlreadyExistsError, ServiceError, ValidationError,
};
use crate::service::test_utilities::{dummy_principal, dummy_student};

fn dummy_exam(id: ExamId) -> Exam {
    Exam {
        id,
        created_date: OffsetDateTime::now_utc(),
        group_id: Uuid::new_v4().into(),
        teacher_id: Uuid::new_v4().into(),
        title: "Midterm".to_string(),
        description: String::new(),
        exam_date: date!(2024 - 12 - 15),
        start_time: time!(10:00),
        end_time: time!(12:00),
        total_points: 100,
        passing_score: 60,
        results_published: false,
    }
}

fn setup_service(
    exam_repository: MockExamRepository,
    exam_result_repository: MockExamResultRepository,
    student_repository: MockStudentRepository,
) -> CourseworkService {
    CourseworkService::new(
        Arc::new(MockAssignmentRepository::default()),
        Arc::new(MockSubmissionRepository::default()),
        Arc::new(exam_repository),
        Arc::new(exam_result_repository),
        Arc::new(MockGroupRepository::default()),
        Arc::new(student_repository),
    )
}

fn result_request(exam_id: ExamId, student_id: StudentId, score: u32) -> CreateExamResultRequest {
    CreateExamResultRequest {
        exam_id,
        student_id,
        score,
        grade: "B".to_string(),
        answer_file_path: None,
    }
}

#[tokio::test]
async fn test_exam_result_score_above_total_is_rejected() {
    let exam_id: ExamId = Uuid::new_v4().into();
    let mut exam_repository = MockExamRepository::default();
    exam_repository
        .expect_get_exam()
        .once()
        .returning(|id, _| Ok(Some(dummy_exam(*id))));

    let service = setup_service(
        exam_repository,
        MockExamResultRepository::default(),
        MockStudentRepository::default(),
    );
    let principal = dummy_principal(Role::SuperAdmin, None);

    let result = service
        .create_exam_result(
            &principal,
            result_request(exam_id, Uuid::new_v4().into(), 101),
        )
        .await;
    assert!(matches!(
        result,
        Err(ServiceError::Validation(
            ValidationError::ScoreExceedsTotal { .. }
        ))
    ));
}

#[tokio::test]
async fn test_second_result_for_same_student_is_rejected() {
    let exam_id: ExamId = Uuid::new_v4().into();
    let student_id: StudentId = Uuid::new_v4().into();

    let mut exam_repository = MockExamRepository::default();
    exam_repository
        .expect_get_exam()
        .once()
        .returning(|id, _| Ok(Some(dummy_exam(*id))));

    let mut student_repository = MockStudentRepository::default();
    student_repository
        .expect_get_student()
        .once()
        .returning(|id, _| Ok(Some(dummy_student(*id, Uuid::new_v4().into()))));

    let mut exam_result_repository = MockExamResultRepository::default();
    exam_result_repository
        .expect_create_exam_result()
        .once()
        .returning(|_| Err(DataLayerError::AlreadyExists));

    let service = setup_service(exam_repository, exam_result_repository, student_repository);
    let principal = dummy_principal(Role::SuperAdmin, None);

    let result = service
        .create_exam_result(&principal, result_request(exam_id, student_id, 80))
        .await;
    assert!(matches!(
        result,
        Err(ServiceError::EntityAlreadyExists(
            EntityAlreadyExistsError::ExamResult { .. }
        ))
    ));
}

#[tokio::test]
async fn test_republishing_results_is_noop() {
    let exam_id: ExamId = Uuid::new_v4().into();
    let mut exam_repository = MockExamRepository::default();
    exam_repository
        .expect_get_exam()
        .once()
        .returning(|id, _| {
            let mut exam = dummy_exam(*id);
            exam.results_published = true;
            Ok(Some(exam))
        });
    // no set_results_published expected

    let service = setup_service(
        exam_repository,
        MockExamResultRepository::default(),
        MockStudentRepository::default(),
    );
    let principal = dummy_principal(Role::Director, Some(Uuid::new_v4().into()));

    service
        .publish_exam_results(&principal, &exam_id)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_students_cannot_publish_results() {
    let service = setup_service(
        MockExamRepository::default(),
        MockExamResultRepository::default(),
        MockStudentRepository::default(),
    );
    let principal = dummy_principal(Role::Student, None);

    let result = service
        .publish_exam_results(&principal, &Uuid::new_v4().into())
        .await;
    assert!(matches!(
        result,
        Err(ServiceError::Validation(ValidationError::Forbidden))
    ));
}
