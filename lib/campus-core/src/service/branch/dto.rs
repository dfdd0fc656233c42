use shared_types::{BranchId, CenterId, ProfileId};

#[derive(Clone, Debug)]
pub struct CreateBranchRequest {
    /// Required for super admins; center staff default to their own tenant.
    pub center_id: Option<CenterId>,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub manager_id: Option<ProfileId>,
}

#[derive(Clone, Debug)]
pub struct CreateRoomRequest {
    pub branch_id: BranchId,
    pub name: String,
    pub capacity: u32,
    pub equipment: String,
}
