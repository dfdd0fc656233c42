use std::sync::Arc;

use mockall::predicate::eq;
use shared_types::CenterId;
use uuid::Uuid;

use super::CenterService;
use crate::model::center::{CenterStatus, UpdateCenterRequest};
use crate::model::scope::VisibilityScope;
use crate::model::user::Role;
use crate::repository::branch_repository::MockBranchRepository;
use crate::repository::center_repository::MockCenterRepository;
use crate::repository::group_repository::MockGroupRepository;
use crate::repository::student_repository::MockStudentRepository;
use crate::repository::subject_repository::MockSubjectRepository;
use crate::repository::teacher_repository::MockTeacherRepository;
use crate::service::error::{ServiceError, ValidationError};
use crate::service::test_utilities::{dummy_center, dummy_principal};

fn setup_service(
    center_repository: MockCenterRepository,
    subject_repository: MockSubjectRepository,
) -> CenterService {
    CenterService::new(
        Arc::new(center_repository),
        Arc::new(subject_repository),
        Arc::new(MockBranchRepository::default()),
        Arc::new(MockGroupRepository::default()),
        Arc::new(MockTeacherRepository::default()),
        Arc::new(MockStudentRepository::default()),
    )
}

#[tokio::test]
async fn test_activate_active_center_is_noop() {
    let center_id: CenterId = Uuid::new_v4().into();
    let mut center_repository = MockCenterRepository::default();
    center_repository
        .expect_get_center()
        .with(eq(center_id), eq(VisibilityScope::Unrestricted))
        .once()
        .returning(move |id, _| Ok(Some(dummy_center(*id))));
    // no update expected

    let service = setup_service(center_repository, MockSubjectRepository::default());
    let principal = dummy_principal(Role::SuperAdmin, None);

    service
        .activate_center(&principal, &center_id)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_deactivate_then_activate_round_trip() {
    let center_id: CenterId = Uuid::new_v4().into();
    let mut center_repository = MockCenterRepository::default();
    center_repository
        .expect_get_center()
        .once()
        .returning(move |id, _| Ok(Some(dummy_center(*id))));
    center_repository
        .expect_update_center()
        .withf(|request: &UpdateCenterRequest| request.status == Some(CenterStatus::Inactive))
        .once()
        .returning(|_| Ok(()));
    center_repository
        .expect_get_center()
        .once()
        .returning(move |id, _| {
            let mut center = dummy_center(*id);
            center.status = CenterStatus::Inactive;
            Ok(Some(center))
        });
    center_repository
        .expect_update_center()
        .withf(|request: &UpdateCenterRequest| request.status == Some(CenterStatus::Active))
        .once()
        .returning(|_| Ok(()));

    let service = setup_service(center_repository, MockSubjectRepository::default());
    let principal = dummy_principal(Role::SuperAdmin, None);

    service
        .deactivate_center(&principal, &center_id)
        .await
        .unwrap();
    service
        .activate_center(&principal, &center_id)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_center_staff_cannot_activate() {
    let center_id: CenterId = Uuid::new_v4().into();
    let service = setup_service(
        MockCenterRepository::default(),
        MockSubjectRepository::default(),
    );
    let principal = dummy_principal(Role::Director, Some(center_id));

    let result = service.activate_center(&principal, &center_id).await;
    assert!(matches!(
        result,
        Err(ServiceError::Validation(ValidationError::Forbidden))
    ));
}

#[tokio::test]
async fn test_get_center_outside_tenant_is_not_found() {
    let own_center: CenterId = Uuid::new_v4().into();
    let foreign_center: CenterId = Uuid::new_v4().into();

    let mut center_repository = MockCenterRepository::default();
    center_repository
        .expect_get_center()
        .with(eq(foreign_center), eq(VisibilityScope::Center(own_center)))
        .once()
        .returning(|_, _| Ok(None));

    let service = setup_service(center_repository, MockSubjectRepository::default());
    let principal = dummy_principal(Role::Manager, Some(own_center));

    let result = service.get_center(&principal, &foreign_center).await;
    assert!(matches!(result, Err(ServiceError::EntityNotFound(_))));
}
