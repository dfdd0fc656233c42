use shared_types::UserId;
use time::OffsetDateTime;
use uuid::Uuid;

use super::UserService;
use super::dto::{CreateUserRequest, CreateUserResponse};
use crate::model::common::GetListResponse;
use crate::model::scope::{Principal, PrincipalProfile, Resource, scope_for};
use crate::model::user::{Role, UpdateUserRequest, User, UserListQuery, UserProfile};
use crate::repository::error::DataLayerError;
use crate::service::error::{EntityNotFoundError, ServiceError, ValidationError};

impl UserService {
    /// Resolves a bearer token to an acting principal. `None` means the
    /// token is unknown and the request must be rejected as unauthorized.
    pub async fn get_principal_by_token(
        &self,
        token: &str,
    ) -> Result<Option<Principal>, ServiceError> {
        let Some(user) = self.user_repository.get_user_by_token(token).await? else {
            return Ok(None);
        };

        let profile = match self.user_repository.get_profile_by_user_id(&user.id).await? {
            None => None,
            Some(profile) => {
                let teacher_id = match profile.role {
                    Role::Teacher => self
                        .teacher_repository
                        .get_teacher_by_user_id(&user.id)
                        .await?
                        .map(|teacher| teacher.id),
                    _ => None,
                };
                let student_id = match profile.role {
                    Role::Student => self
                        .student_repository
                        .get_student_by_user_id(&user.id)
                        .await?
                        .map(|student| student.id),
                    _ => None,
                };
                Some(PrincipalProfile {
                    id: profile.id,
                    role: profile.role,
                    center_id: profile.center_id,
                    teacher_id,
                    student_id,
                    is_blocked: profile.is_blocked,
                })
            }
        };

        Ok(Some(Principal { user, profile }))
    }

    pub async fn create_user(
        &self,
        principal: &Principal,
        request: CreateUserRequest,
    ) -> Result<CreateUserResponse, ServiceError> {
        let center_id = self.validate_provisioning(principal, &request)?;

        let now = OffsetDateTime::now_utc();
        let user = User {
            id: Uuid::new_v4().into(),
            created_date: now,
            last_modified: now,
            username: request.username,
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            api_token: Uuid::new_v4().to_string(),
        };
        let api_token = user.api_token.clone();

        let id = self.user_repository.create_user(user).await?;
        self.user_repository
            .create_profile(UserProfile {
                id: Uuid::new_v4().into(),
                created_date: now,
                last_modified: now,
                user_id: id,
                role: request.role,
                center_id,
                phone: request.phone,
                passport_number: request.passport_number,
                birthday: request.birthday,
                is_blocked: false,
            })
            .await?;

        Ok(CreateUserResponse { id, api_token })
    }

    pub async fn get_user(
        &self,
        principal: &Principal,
        id: &UserId,
    ) -> Result<User, ServiceError> {
        let scope = scope_for(principal, Resource::User);
        self.user_repository
            .get_user(id, &scope)
            .await?
            .ok_or_else(|| EntityNotFoundError::User(*id).into())
    }

    pub async fn get_user_list(
        &self,
        principal: &Principal,
        query: UserListQuery,
    ) -> Result<GetListResponse<User>, ServiceError> {
        let scope = scope_for(principal, Resource::User);
        Ok(self.user_repository.get_user_list(query, &scope).await?)
    }

    pub async fn update_user(
        &self,
        principal: &Principal,
        request: UpdateUserRequest,
    ) -> Result<(), ServiceError> {
        self.get_user(principal, &request.id).await?;
        self.user_repository.update_user(request).await?;
        Ok(())
    }

    pub async fn block_user(
        &self,
        principal: &Principal,
        id: &UserId,
    ) -> Result<(), ServiceError> {
        self.set_blocked(principal, id, true).await
    }

    pub async fn unblock_user(
        &self,
        principal: &Principal,
        id: &UserId,
    ) -> Result<(), ServiceError> {
        self.set_blocked(principal, id, false).await
    }

    async fn set_blocked(
        &self,
        principal: &Principal,
        id: &UserId,
        blocked: bool,
    ) -> Result<(), ServiceError> {
        if !principal.is_super_admin() && !principal.is_center_staff() {
            return Err(ValidationError::Forbidden.into());
        }
        self.get_user(principal, id).await?;
        self.user_repository
            .set_profile_blocked(id, blocked)
            .await
            .map_err(|error| match error {
                // a user without a profile has no blockable role
                DataLayerError::RecordNotUpdated => EntityNotFoundError::User(*id).into(),
                error => ServiceError::from(error),
            })?;
        Ok(())
    }

    fn validate_provisioning(
        &self,
        principal: &Principal,
        request: &CreateUserRequest,
    ) -> Result<Option<shared_types::CenterId>, ServiceError> {
        if principal.is_super_admin() {
            return match request.role {
                Role::SuperAdmin => Ok(None),
                _ => request
                    .center_id
                    .map(Some)
                    .ok_or_else(|| ValidationError::CenterRequired.into()),
            };
        }

        if !principal.is_center_staff() {
            return Err(ValidationError::Forbidden.into());
        }
        if request.role == Role::SuperAdmin {
            return Err(ValidationError::Forbidden.into());
        }
        // staff always provision into their own tenant
        principal
            .profile
            .as_ref()
            .and_then(|profile| profile.center_id)
            .map(Some)
            .ok_or_else(|| ValidationError::CenterRequired.into())
    }
}
