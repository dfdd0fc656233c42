use std::sync::Arc;

use crate::repository::notification_repository::NotificationRepository;

pub mod dto;
pub mod service;

#[derive(Clone)]
pub struct NotificationService {
    notification_repository: Arc<dyn NotificationRepository>,
}

impl NotificationService {
    pub fn new(notification_repository: Arc<dyn NotificationRepository>) -> Self {
        Self {
            notification_repository,
        }
    }
}
