use shared_types::{CenterId, SubjectId};
use time::OffsetDateTime;
use uuid::Uuid;

use super::CenterService;
use super::dto::{CenterStatisticsResponse, CreateCenterRequest, CreateSubjectRequest};
use crate::model::branch::BranchListQuery;
use crate::model::center::{
    Center, CenterListQuery, CenterStatus, Subject, SubjectListQuery, UpdateCenterRequest,
};
use crate::model::common::{GetListResponse, ListPagination};
use crate::model::group::GroupListQuery;
use crate::model::scope::{Principal, Resource, VisibilityScope, scope_for};
use crate::model::student::StudentListQuery;
use crate::model::teacher::TeacherListQuery;
use crate::service::error::{EntityNotFoundError, ServiceError, ValidationError};

impl CenterService {
    pub async fn create_center(
        &self,
        principal: &Principal,
        request: CreateCenterRequest,
    ) -> Result<CenterId, ServiceError> {
        if !principal.is_super_admin() {
            return Err(ValidationError::Forbidden.into());
        }

        let now = OffsetDateTime::now_utc();
        let center = Center {
            id: Uuid::new_v4().into(),
            created_date: now,
            last_modified: now,
            name: request.name,
            address: request.address,
            phone: request.phone,
            email: request.email,
            description: request.description,
            license_number: request.license_number,
            opened_at: request.opened_at,
            status: CenterStatus::Active,
            website: request.website,
            logo_path: None,
            director_id: request.director_id,
        };
        let id = self.center_repository.create_center(center).await?;
        Ok(id)
    }

    pub async fn get_center(
        &self,
        principal: &Principal,
        id: &CenterId,
    ) -> Result<Center, ServiceError> {
        let scope = scope_for(principal, Resource::Center);
        self.center_repository
            .get_center(id, &scope)
            .await?
            .ok_or_else(|| EntityNotFoundError::Center(*id).into())
    }

    pub async fn get_center_list(
        &self,
        principal: &Principal,
        query: CenterListQuery,
    ) -> Result<GetListResponse<Center>, ServiceError> {
        let scope = scope_for(principal, Resource::Center);
        Ok(self.center_repository.get_center_list(query, &scope).await?)
    }

    pub async fn update_center(
        &self,
        principal: &Principal,
        request: UpdateCenterRequest,
    ) -> Result<(), ServiceError> {
        if !principal.is_super_admin() && !principal.is_center_staff() {
            return Err(ValidationError::Forbidden.into());
        }
        // scoped fetch keeps staff inside their own tenant
        self.get_center(principal, &request.id).await?;
        self.center_repository.update_center(request).await?;
        Ok(())
    }

    /// Idempotent; re-activating an active center is a no-op.
    pub async fn activate_center(
        &self,
        principal: &Principal,
        id: &CenterId,
    ) -> Result<(), ServiceError> {
        self.set_center_status(principal, id, CenterStatus::Active)
            .await
    }

    /// Idempotent; child branches are untouched.
    pub async fn deactivate_center(
        &self,
        principal: &Principal,
        id: &CenterId,
    ) -> Result<(), ServiceError> {
        self.set_center_status(principal, id, CenterStatus::Inactive)
            .await
    }

    async fn set_center_status(
        &self,
        principal: &Principal,
        id: &CenterId,
        status: CenterStatus,
    ) -> Result<(), ServiceError> {
        if !principal.is_super_admin() {
            return Err(ValidationError::Forbidden.into());
        }
        let center = self.get_center(principal, id).await?;
        if center.status == status {
            return Ok(());
        }
        self.center_repository
            .update_center(UpdateCenterRequest {
                id: *id,
                status: Some(status),
                ..Default::default()
            })
            .await?;
        Ok(())
    }

    pub async fn get_center_statistics(
        &self,
        principal: &Principal,
        id: &CenterId,
    ) -> Result<CenterStatisticsResponse, ServiceError> {
        self.get_center(principal, id).await?;

        // only the totals are of interest
        let probe = ListPagination {
            page: 0,
            page_size: 1,
        };
        let scope = VisibilityScope::Center(*id);

        let branches = self
            .branch_repository
            .get_branch_list(
                BranchListQuery {
                    pagination: Some(probe),
                    ..Default::default()
                },
                &scope,
            )
            .await?
            .total_items;
        let groups = self
            .group_repository
            .get_group_list(
                GroupListQuery {
                    pagination: Some(probe),
                    ..Default::default()
                },
                &scope,
            )
            .await?
            .total_items;
        let teachers = self
            .teacher_repository
            .get_teacher_list(
                TeacherListQuery {
                    pagination: Some(probe),
                    ..Default::default()
                },
                &scope,
            )
            .await?
            .total_items;
        let students = self
            .student_repository
            .get_student_list(
                StudentListQuery {
                    pagination: Some(probe),
                    ..Default::default()
                },
                &scope,
            )
            .await?
            .total_items;

        Ok(CenterStatisticsResponse {
            branches,
            groups,
            teachers,
            students,
        })
    }

    pub async fn create_subject(
        &self,
        principal: &Principal,
        request: CreateSubjectRequest,
    ) -> Result<SubjectId, ServiceError> {
        if !principal.is_super_admin() && !principal.is_center_staff() {
            return Err(ValidationError::Forbidden.into());
        }
        let center_id = self.resolve_center(principal, request.center_id)?;
        let subject = Subject {
            id: Uuid::new_v4().into(),
            created_date: OffsetDateTime::now_utc(),
            center_id,
            name: request.name,
            description: request.description,
        };
        let id = self.subject_repository.create_subject(subject).await?;
        Ok(id)
    }

    pub async fn get_subject(
        &self,
        principal: &Principal,
        id: &SubjectId,
    ) -> Result<Subject, ServiceError> {
        let scope = scope_for(principal, Resource::Subject);
        self.subject_repository
            .get_subject(id, &scope)
            .await?
            .ok_or_else(|| EntityNotFoundError::Subject(*id).into())
    }

    pub async fn get_subject_list(
        &self,
        principal: &Principal,
        query: SubjectListQuery,
    ) -> Result<GetListResponse<Subject>, ServiceError> {
        let scope = scope_for(principal, Resource::Subject);
        Ok(self
            .subject_repository
            .get_subject_list(query, &scope)
            .await?)
    }

    pub async fn delete_subject(
        &self,
        principal: &Principal,
        id: &SubjectId,
    ) -> Result<(), ServiceError> {
        if !principal.is_super_admin() && !principal.is_center_staff() {
            return Err(ValidationError::Forbidden.into());
        }
        self.get_subject(principal, id).await?;
        self.subject_repository.delete_subject(id).await?;
        Ok(())
    }

    fn resolve_center(
        &self,
        principal: &Principal,
        requested: Option<CenterId>,
    ) -> Result<CenterId, ServiceError> {
        if principal.is_super_admin() {
            return requested.ok_or_else(|| ValidationError::CenterRequired.into());
        }
        principal
            .profile
            .as_ref()
            .and_then(|profile| profile.center_id)
            .ok_or_else(|| ValidationError::CenterRequired.into())
    }
}
