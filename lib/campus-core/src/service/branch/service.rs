use shared_types::{BranchId, CenterId, RoomId};
use time::OffsetDateTime;
use uuid::Uuid;

use super::BranchService;
use super::dto::{CreateBranchRequest, CreateRoomRequest};
use crate::model::branch::{
    Branch, BranchListQuery, BranchStatus, Room, RoomListQuery, UpdateBranchRequest,
    UpdateRoomRequest,
};
use crate::model::common::GetListResponse;
use crate::model::scope::{Principal, Resource, scope_for};
use crate::service::error::{EntityNotFoundError, ServiceError, ValidationError};

impl BranchService {
    pub async fn create_branch(
        &self,
        principal: &Principal,
        request: CreateBranchRequest,
    ) -> Result<BranchId, ServiceError> {
        let center_id = self.resolve_center(principal, request.center_id)?;
        let now = OffsetDateTime::now_utc();
        let branch = Branch {
            id: Uuid::new_v4().into(),
            created_date: now,
            last_modified: now,
            center_id,
            name: request.name,
            address: request.address,
            phone: request.phone,
            manager_id: request.manager_id,
            status: BranchStatus::Open,
        };
        let id = self.branch_repository.create_branch(branch).await?;
        Ok(id)
    }

    pub async fn get_branch(
        &self,
        principal: &Principal,
        id: &BranchId,
    ) -> Result<Branch, ServiceError> {
        let scope = scope_for(principal, Resource::Branch);
        self.branch_repository
            .get_branch(id, &scope)
            .await?
            .ok_or_else(|| EntityNotFoundError::Branch(*id).into())
    }

    pub async fn get_branch_list(
        &self,
        principal: &Principal,
        query: BranchListQuery,
    ) -> Result<GetListResponse<Branch>, ServiceError> {
        let scope = scope_for(principal, Resource::Branch);
        Ok(self.branch_repository.get_branch_list(query, &scope).await?)
    }

    pub async fn update_branch(
        &self,
        principal: &Principal,
        request: UpdateBranchRequest,
    ) -> Result<(), ServiceError> {
        self.ensure_staff(principal)?;
        self.get_branch(principal, &request.id).await?;
        self.branch_repository.update_branch(request).await?;
        Ok(())
    }

    /// Idempotent status flip; already-open stays open.
    pub async fn open_branch(
        &self,
        principal: &Principal,
        id: &BranchId,
    ) -> Result<(), ServiceError> {
        self.set_branch_status(principal, id, BranchStatus::Open)
            .await
    }

    pub async fn close_branch(
        &self,
        principal: &Principal,
        id: &BranchId,
    ) -> Result<(), ServiceError> {
        self.set_branch_status(principal, id, BranchStatus::Closed)
            .await
    }

    async fn set_branch_status(
        &self,
        principal: &Principal,
        id: &BranchId,
        status: BranchStatus,
    ) -> Result<(), ServiceError> {
        self.ensure_staff(principal)?;
        let branch = self.get_branch(principal, id).await?;
        if branch.status == status {
            return Ok(());
        }
        self.branch_repository
            .update_branch(UpdateBranchRequest {
                id: *id,
                status: Some(status),
                ..Default::default()
            })
            .await?;
        Ok(())
    }

    pub async fn create_room(
        &self,
        principal: &Principal,
        request: CreateRoomRequest,
    ) -> Result<RoomId, ServiceError> {
        self.ensure_staff(principal)?;
        if request.capacity == 0 {
            return Err(ValidationError::ZeroCapacity.into());
        }
        // the branch must be visible to the caller
        self.get_branch(principal, &request.branch_id).await?;

        let room = Room {
            id: Uuid::new_v4().into(),
            branch_id: request.branch_id,
            name: request.name,
            capacity: request.capacity,
            equipment: request.equipment,
            is_available: true,
        };
        let id = self.room_repository.create_room(room).await?;
        Ok(id)
    }

    pub async fn get_room(
        &self,
        principal: &Principal,
        id: &RoomId,
    ) -> Result<Room, ServiceError> {
        let scope = scope_for(principal, Resource::Room);
        self.room_repository
            .get_room(id, &scope)
            .await?
            .ok_or_else(|| EntityNotFoundError::Room(*id).into())
    }

    pub async fn get_room_list(
        &self,
        principal: &Principal,
        query: RoomListQuery,
    ) -> Result<GetListResponse<Room>, ServiceError> {
        let scope = scope_for(principal, Resource::Room);
        Ok(self.room_repository.get_room_list(query, &scope).await?)
    }

    pub async fn update_room(
        &self,
        principal: &Principal,
        request: UpdateRoomRequest,
    ) -> Result<(), ServiceError> {
        self.ensure_staff(principal)?;
        if request.capacity == Some(0) {
            return Err(ValidationError::ZeroCapacity.into());
        }
        self.get_room(principal, &request.id).await?;
        self.room_repository.update_room(request).await?;
        Ok(())
    }

    pub async fn occupy_room(
        &self,
        principal: &Principal,
        id: &RoomId,
    ) -> Result<(), ServiceError> {
        self.set_room_availability(principal, id, false).await
    }

    pub async fn free_room(
        &self,
        principal: &Principal,
        id: &RoomId,
    ) -> Result<(), ServiceError> {
        self.set_room_availability(principal, id, true).await
    }

    async fn set_room_availability(
        &self,
        principal: &Principal,
        id: &RoomId,
        is_available: bool,
    ) -> Result<(), ServiceError> {
        self.ensure_staff(principal)?;
        let room = self.get_room(principal, id).await?;
        if room.is_available == is_available {
            return Ok(());
        }
        self.room_repository
            .update_room(UpdateRoomRequest {
                id: *id,
                is_available: Some(is_available),
                ..Default::default()
            })
            .await?;
        Ok(())
    }

    pub async fn delete_room(
        &self,
        principal: &Principal,
        id: &RoomId,
    ) -> Result<(), ServiceError> {
        self.ensure_staff(principal)?;
        self.get_room(principal, id).await?;
        self.room_repository.delete_room(id).await?;
        Ok(())
    }

    fn ensure_staff(&self, principal: &Principal) -> Result<(), ServiceError> {
        if principal.is_super_admin() || principal.is_center_staff() {
            Ok(())
        } else {
            Err(ValidationError::Forbidden.into())
        }
    }

    fn resolve_center(
        &self,
        principal: &Principal,
        requested: Option<CenterId>,
    ) -> Result<CenterId, ServiceError> {
        if principal.is_super_admin() {
            return requested.ok_or_else(|| ValidationError::CenterRequired.into());
        }
        if !principal.is_center_staff() {
            return Err(ValidationError::Forbidden.into());
        }
        principal
            .profile
            .as_ref()
            .and_then(|profile| profile.center_id)
            .ok_or_else(|| ValidationError::CenterRequired.into())
    }
}
