use std::sync::Arc;

use mockall::predicate::eq;
use shared_types::{GroupId, LeadId, StudentId};
use time::OffsetDateTime;
use uuid::Uuid;

use super::EnrollmentService;
use crate::model::attendance::AttendanceCounts;
use crate::model::common::GetListResponse;
use crate::model::group::GroupStatus;
use crate::model::lead::{Lead, LeadSource, LeadSourceCount, LeadStatus, UpdateLeadRequest};
use crate::model::scope::VisibilityScope;
use crate::model::user::Role;
use crate::repository::attendance_repository::MockAttendanceRepository;
use crate::repository::branch_repository::MockBranchRepository;
use crate::repository::contract_repository::MockContractRepository;
use crate::repository::group_repository::MockGroupRepository;
use crate::repository::lead_repository::MockLeadRepository;
use crate::repository::payment_repository::MockPaymentRepository;
use crate::repository::student_repository::MockStudentRepository;
use crate::service::error::{BusinessLogicError, EntityNotFoundError, ServiceError};
use crate::service::test_utilities::{dummy_group, dummy_principal, dummy_student};

fn dummy_lead(id: LeadId, status: LeadStatus) -> Lead {
    let now = OffsetDateTime::now_utc();
    Lead {
        id,
        created_date: now,
        last_modified: now,
        branch_id: Uuid::new_v4().into(),
        name: "Jordan Miller".to_string(),
        email: "jordan@example.com".to_string(),
        phone: "+100000002".to_string(),
        course_interested_id: None,
        status,
        source: LeadSource::Website,
        assigned_to_id: None,
        notes: String::new(),
    }
}

fn setup_service(
    student_repository: MockStudentRepository,
    lead_repository: MockLeadRepository,
    group_repository: MockGroupRepository,
) -> EnrollmentService {
    EnrollmentService::new(
        Arc::new(student_repository),
        Arc::new(lead_repository),
        Arc::new(MockContractRepository::default()),
        Arc::new(group_repository),
        Arc::new(MockBranchRepository::default()),
        Arc::new(MockAttendanceRepository::default()),
        Arc::new(MockPaymentRepository::default()),
    )
}

#[tokio::test]
async fn test_assign_group_unknown_group_is_not_found() {
    let student_id: StudentId = Uuid::new_v4().into();
    let group_id: GroupId = Uuid::new_v4().into();
    let center_id = Uuid::new_v4().into();

    let mut student_repository = MockStudentRepository::default();
    student_repository
        .expect_get_student()
        .once()
        .returning(|id, _| Ok(Some(dummy_student(*id, Uuid::new_v4().into()))));

    let mut group_repository = MockGroupRepository::default();
    group_repository
        .expect_get_group()
        .with(eq(group_id), eq(VisibilityScope::Center(center_id)))
        .once()
        .returning(|_, _| Ok(None));

    let service = setup_service(
        student_repository,
        MockLeadRepository::default(),
        group_repository,
    );
    let principal = dummy_principal(Role::Admin, Some(center_id));

    let result = service.assign_group(&principal, &student_id, &group_id).await;
    assert!(matches!(
        result,
        Err(ServiceError::EntityNotFound(EntityNotFoundError::Group(_)))
    ));
}

#[tokio::test]
async fn test_assign_group_rejects_closed_group() {
    let student_id: StudentId = Uuid::new_v4().into();
    let group_id: GroupId = Uuid::new_v4().into();
    let center_id = Uuid::new_v4().into();

    let mut student_repository = MockStudentRepository::default();
    student_repository
        .expect_get_student()
        .once()
        .returning(|id, _| Ok(Some(dummy_student(*id, Uuid::new_v4().into()))));

    let mut group_repository = MockGroupRepository::default();
    group_repository
        .expect_get_group()
        .once()
        .returning(move |id, _| {
            let mut group = dummy_group(*id, center_id, Uuid::new_v4().into());
            group.status = GroupStatus::Closed;
            Ok(Some(group))
        });

    let service = setup_service(
        student_repository,
        MockLeadRepository::default(),
        group_repository,
    );
    let principal = dummy_principal(Role::Admin, Some(center_id));

    let result = service.assign_group(&principal, &student_id, &group_id).await;
    assert!(matches!(
        result,
        Err(ServiceError::BusinessLogic(BusinessLogicError::GroupClosed(
            _
        )))
    ));
}

#[tokio::test]
async fn test_convert_lead_creates_student_and_marks_converted() {
    let lead_id: LeadId = Uuid::new_v4().into();

    let mut lead_repository = MockLeadRepository::default();
    lead_repository
        .expect_get_lead()
        .once()
        .returning(|id, _| Ok(Some(dummy_lead(*id, LeadStatus::New))));
    lead_repository
        .expect_update_lead()
        .withf(|request: &UpdateLeadRequest| request.status == Some(LeadStatus::Converted))
        .once()
        .returning(|_| Ok(()));

    let mut student_repository = MockStudentRepository::default();
    student_repository
        .expect_create_student()
        .withf(|student| student.first_name == "Jordan" && student.last_name == "Miller")
        .once()
        .returning(|student| Ok(student.id));

    let service = setup_service(
        student_repository,
        lead_repository,
        MockGroupRepository::default(),
    );
    let principal = dummy_principal(Role::Manager, Some(Uuid::new_v4().into()));

    service
        .convert_lead_to_student(&principal, &lead_id)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_convert_converted_lead_is_rejected() {
    let lead_id: LeadId = Uuid::new_v4().into();

    let mut lead_repository = MockLeadRepository::default();
    lead_repository
        .expect_get_lead()
        .once()
        .returning(|id, _| Ok(Some(dummy_lead(*id, LeadStatus::Converted))));

    let service = setup_service(
        MockStudentRepository::default(),
        lead_repository,
        MockGroupRepository::default(),
    );
    let principal = dummy_principal(Role::Manager, Some(Uuid::new_v4().into()));

    let result = service.convert_lead_to_student(&principal, &lead_id).await;
    assert!(matches!(
        result,
        Err(ServiceError::BusinessLogic(
            BusinessLogicError::LeadAlreadyConverted(_)
        ))
    ));
}

#[tokio::test]
async fn test_student_attendance_history_counts_own_rows_only() {
    let student_id: StudentId = Uuid::new_v4().into();
    let center_id = Uuid::new_v4().into();

    let mut student_repository = MockStudentRepository::default();
    student_repository
        .expect_get_student()
        .once()
        .returning(|id, _| Ok(Some(dummy_student(*id, Uuid::new_v4().into()))));

    let mut attendance_repository = MockAttendanceRepository::default();
    attendance_repository
        .expect_get_attendance_counts()
        .withf(move |filter, _| filter.student_id == Some(student_id))
        .once()
        .returning(|_, _| {
            Ok(AttendanceCounts {
                total: 20,
                present: 15,
                absent: 3,
                late: 1,
                excused: 1,
            })
        });

    let service = EnrollmentService::new(
        Arc::new(student_repository),
        Arc::new(MockLeadRepository::default()),
        Arc::new(MockContractRepository::default()),
        Arc::new(MockGroupRepository::default()),
        Arc::new(MockBranchRepository::default()),
        Arc::new(attendance_repository),
        Arc::new(MockPaymentRepository::default()),
    );
    let principal = dummy_principal(Role::Manager, Some(center_id));

    let history = service
        .get_student_attendance_history(&principal, &student_id)
        .await
        .unwrap();
    assert_eq!(history.total, 20);
    assert_eq!(history.present, 15);
    assert_eq!(history.excused, 1);
}

#[tokio::test]
async fn test_student_payment_history_pins_filter_to_student() {
    let student_id: StudentId = Uuid::new_v4().into();
    let center_id = Uuid::new_v4().into();

    let mut student_repository = MockStudentRepository::default();
    student_repository
        .expect_get_student()
        .once()
        .returning(|id, _| Ok(Some(dummy_student(*id, Uuid::new_v4().into()))));

    let mut payment_repository = MockPaymentRepository::default();
    payment_repository
        .expect_get_payment_list()
        .withf(move |query, _| {
            query.filtering.as_ref().and_then(|filter| filter.student_id) == Some(student_id)
                && query.sorting.is_some()
        })
        .once()
        .returning(|_, _| {
            Ok(GetListResponse {
                values: vec![],
                total_pages: 0,
                total_items: 0,
            })
        });

    let service = EnrollmentService::new(
        Arc::new(student_repository),
        Arc::new(MockLeadRepository::default()),
        Arc::new(MockContractRepository::default()),
        Arc::new(MockGroupRepository::default()),
        Arc::new(MockBranchRepository::default()),
        Arc::new(MockAttendanceRepository::default()),
        Arc::new(payment_repository),
    );
    let principal = dummy_principal(Role::Manager, Some(center_id));

    let history = service
        .get_student_payment_history(&principal, &student_id)
        .await
        .unwrap();
    assert_eq!(history.total_items, 0);
}

#[tokio::test]
async fn test_lead_statistics_stay_inside_callers_tenant() {
    let center_id = Uuid::new_v4().into();

    let mut lead_repository = MockLeadRepository::default();
    lead_repository
        .expect_get_lead_source_counts()
        .with(eq(VisibilityScope::Center(center_id)))
        .once()
        .returning(|_| {
            Ok(vec![
                LeadSourceCount {
                    source: LeadSource::Website,
                    count: 3,
                },
                LeadSourceCount {
                    source: LeadSource::Referral,
                    count: 1,
                },
            ])
        });

    let service = EnrollmentService::new(
        Arc::new(MockStudentRepository::default()),
        Arc::new(lead_repository),
        Arc::new(MockContractRepository::default()),
        Arc::new(MockGroupRepository::default()),
        Arc::new(MockBranchRepository::default()),
        Arc::new(MockAttendanceRepository::default()),
        Arc::new(MockPaymentRepository::default()),
    );
    let principal = dummy_principal(Role::Manager, Some(center_id));

    let statistics = service.get_lead_statistics(&principal).await.unwrap();
    assert_eq!(statistics.sources.len(), 2);
    assert_eq!(statistics.sources[0].count, 3);
}
