//! Notification and badge DTOs

use serde::Serialize;

use core_kernel::ParticipantId;
use domain_lifecycle::Notification;

#[derive(Debug, Serialize)]
pub struct NotificationListResponse {
    pub unread: usize,
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Serialize)]
pub struct MarkAllReadResponse {
    pub marked: usize,
}

#[derive(Debug, Serialize)]
pub struct BadgeResponse {
    pub participant_id: ParticipantId,
    pub helper_badges: u32,
}
