use std::sync::Arc;

use crate::repository::branch_repository::BranchRepository;
use crate::repository::room_repository::RoomRepository;

pub mod dto;
pub mod service;

#[derive(Clone)]
pub struct BranchService {
    branch_repository: Arc<dyn BranchRepository>,
    room_repository: Arc<dyn RoomRepository>,
}

impl BranchService {
    pub fn new(
        branch_repository: Arc<dyn BranchRepository>,
        room_repository: Arc<dyn RoomRepository>,
    ) -> Self {
        Self {
            branch_repository,
            room_repository,
        }
    }
}
