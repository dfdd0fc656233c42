use std::sync::Arc;

use uuid::Uuid;

use super::UserService;
use super::dto::CreateUserRequest;
use crate::model::user::Role;
use crate::repository::student_repository::MockStudentRepository;
use crate::repository::teacher_repository::MockTeacherRepository;
use crate::repository::error::DataLayerError;
use crate::repository::user_repository::MockUserRepository;
use crate::service::error::{EntityNotFoundError, ServiceError, ValidationError};
use crate::service::test_utilities::{dummy_principal, dummy_user};

fn setup_service(user_repository: MockUserRepository) -> UserService {
    UserService::new(
        Arc::new(user_repository),
        Arc::new(MockTeacherRepository::default()),
        Arc::new(MockStudentRepository::default()),
    )
}

fn create_request(role: Role) -> CreateUserRequest {
    CreateUserRequest {
        username: "new.user".to_string(),
        first_name: "New".to_string(),
        last_name: "User".to_string(),
        email: "new.user@example.com".to_string(),
        role,
        center_id: None,
        phone: String::new(),
        passport_number: None,
        birthday: None,
    }
}

#[tokio::test]
async fn test_unknown_token_resolves_to_no_principal() {
    let mut user_repository = MockUserRepository::default();
    user_repository
        .expect_get_user_by_token()
        .once()
        .returning(|_| Ok(None));

    let service = setup_service(user_repository);
    let principal = service.get_principal_by_token("bogus").await.unwrap();
    assert!(principal.is_none());
}

#[tokio::test]
async fn test_token_without_profile_resolves_to_profileless_principal() {
    let mut user_repository = MockUserRepository::default();
    user_repository
        .expect_get_user_by_token()
        .once()
        .returning(|_| Ok(Some(dummy_user())));
    user_repository
        .expect_get_profile_by_user_id()
        .once()
        .returning(|_| Ok(None));

    let service = setup_service(user_repository);
    let principal = service
        .get_principal_by_token("token")
        .await
        .unwrap()
        .unwrap();
    assert!(principal.profile.is_none());
}

#[tokio::test]
async fn test_staff_provisioning_forces_own_tenant() {
    let own_center = Uuid::new_v4().into();
    let mut user_repository = MockUserRepository::default();
    user_repository
        .expect_create_user()
        .once()
        .returning(|user| Ok(user.id));
    user_repository
        .expect_create_profile()
        .withf(move |profile| profile.center_id == Some(own_center))
        .once()
        .returning(|_| Ok(()));

    let service = setup_service(user_repository);
    let principal = dummy_principal(Role::Admin, Some(own_center));

    let mut request = create_request(Role::Teacher);
    // a foreign tenant in the request must be ignored
    request.center_id = Some(Uuid::new_v4().into());
    service.create_user(&principal, request).await.unwrap();
}

#[tokio::test]
async fn test_staff_cannot_provision_super_admin() {
    let service = setup_service(MockUserRepository::default());
    let principal = dummy_principal(Role::Director, Some(Uuid::new_v4().into()));

    let result = service
        .create_user(&principal, create_request(Role::SuperAdmin))
        .await;
    assert!(matches!(
        result,
        Err(ServiceError::Validation(ValidationError::Forbidden))
    ));
}

#[tokio::test]
async fn test_blocking_user_without_profile_answers_not_found() {
    let mut user_repository = MockUserRepository::default();
    user_repository
        .expect_get_user()
        .once()
        .returning(|_, _| Ok(Some(dummy_user())));
    user_repository
        .expect_set_profile_blocked()
        .once()
        .returning(|_, _| Err(DataLayerError::RecordNotUpdated));

    let service = setup_service(user_repository);
    let principal = dummy_principal(Role::SuperAdmin, None);

    let result = service.block_user(&principal, &Uuid::new_v4().into()).await;
    assert!(matches!(
        result,
        Err(ServiceError::EntityNotFound(EntityNotFoundError::User(_)))
    ));
}
