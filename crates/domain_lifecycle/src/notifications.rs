//! Notifications
//!
//! Notifications are fire-and-forget: the engine hands them to a
//! [`NotificationDispatcher`] after a change is committed and never looks at
//! the outcome. The in-memory outbox stands in for the notification table a
//! deployed system would keep; the logging dispatcher is the default when no
//! outbox is wired.

use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use core_kernel::{
    DomainPort, HealthCheckResult, HealthCheckable, ItemId, NotificationId, ParticipantId,
    PortError,
};
use crate::events::LifecycleEvent;

const OUTBOX: &str = "notification outbox";

/// What a notification is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationKind {
    ClaimSubmitted,
    QuestionAsked,
    QuestionAnswered,
    ClaimVerified,
    ClaimRejected,
    ItemOnItsWay,
    ItemRecovered,
    ItemClosed,
}

/// A message for one participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub recipient: ParticipantId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub item_id: ItemId,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Builds the notification `recipient` receives for `event`
    ///
    /// Returns `None` for events nobody is told about.
    pub fn for_event(event: &LifecycleEvent, recipient: ParticipantId) -> Option<Self> {
        let (kind, title, message) = match event {
            LifecycleEvent::ItemReported { .. } => return None,
            LifecycleEvent::ClaimSubmitted { category, .. } => (
                NotificationKind::ClaimSubmitted,
                "New Claim Request".to_string(),
                format!("Someone is claiming the {} you found.", category),
            ),
            LifecycleEvent::QuestionAsked { category, .. } => (
                NotificationKind::QuestionAsked,
                "Verification Question".to_string(),
                format!("The finder of the {} has a question for you.", category),
            ),
            LifecycleEvent::QuestionAnswered { category, .. } => (
                NotificationKind::QuestionAnswered,
                "Question Answered".to_string(),
                format!("A claimant answered your question about the {}.", category),
            ),
            LifecycleEvent::ClaimVerified { category, .. } => (
                NotificationKind::ClaimVerified,
                "Claim Verified".to_string(),
                format!(
                    "Your claim for the {} has been verified. Contact information has been shared.",
                    category
                ),
            ),
            LifecycleEvent::ClaimRejected { category, .. } => (
                NotificationKind::ClaimRejected,
                "Claim Rejected".to_string(),
                format!("Your claim for the {} has been rejected.", category),
            ),
            LifecycleEvent::HandoverConfirmed { category, .. } => (
                NotificationKind::ItemOnItsWay,
                "Item On Its Way".to_string(),
                format!("The {} is on its way back to you.", category),
            ),
            LifecycleEvent::RecoveryConfirmed { category, .. } => (
                NotificationKind::ItemRecovered,
                "Item Recovered".to_string(),
                format!(
                    "The owner confirmed receipt of the {}. Thank you for helping!",
                    category
                ),
            ),
            LifecycleEvent::ItemClosed {
                category, reason, ..
            } => (
                NotificationKind::ItemClosed,
                "Item Closed".to_string(),
                match reason {
                    Some(reason) => format!("The {} case has been closed: {}", category, reason),
                    None => format!("The {} case has been closed.", category),
                },
            ),
        };

        Some(Self {
            id: NotificationId::new_v7(),
            recipient,
            kind,
            title,
            message,
            item_id: event.item_id(),
            read: false,
            created_at: event.timestamp(),
        })
    }

    /// Fans an event out into one notification per recipient
    pub fn fan_out(event: &LifecycleEvent) -> Vec<Self> {
        event
            .recipients()
            .into_iter()
            .filter_map(|recipient| Self::for_event(event, recipient))
            .collect()
    }
}

/// Delivery port for notifications
///
/// Dispatch cannot fail from the engine's point of view; adapters log and
/// drop what they cannot deliver.
pub trait NotificationDispatcher: Send + Sync {
    fn dispatch(&self, notification: Notification);
}

/// Dispatcher that only writes a log line
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingDispatcher;

impl NotificationDispatcher for LoggingDispatcher {
    fn dispatch(&self, notification: Notification) {
        info!(
            notification_id = %notification.id,
            recipient = %notification.recipient,
            kind = ?notification.kind,
            item_id = %notification.item_id,
            title = %notification.title,
            "Notification dispatched"
        );
    }
}

/// In-memory notification store, readable per participant
#[derive(Debug, Default)]
pub struct InMemoryOutbox {
    notifications: RwLock<Vec<Notification>>,
}

impl InMemoryOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// A participant's notifications, newest first
    pub fn list_for(&self, recipient: ParticipantId) -> Result<Vec<Notification>, PortError> {
        let notifications = self
            .notifications
            .read()
            .map_err(|_| PortError::poisoned(OUTBOX))?;
        Ok(notifications
            .iter()
            .rev()
            .filter(|n| n.recipient == recipient)
            .cloned()
            .collect())
    }

    pub fn unread_count(&self, recipient: ParticipantId) -> Result<usize, PortError> {
        let notifications = self
            .notifications
            .read()
            .map_err(|_| PortError::poisoned(OUTBOX))?;
        Ok(notifications
            .iter()
            .filter(|n| n.recipient == recipient && !n.read)
            .count())
    }

    /// Marks one notification read, returning the updated record
    pub fn mark_read(&self, id: NotificationId) -> Result<Notification, PortError> {
        let mut notifications = self
            .notifications
            .write()
            .map_err(|_| PortError::poisoned(OUTBOX))?;
        let notification = notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| PortError::not_found("Notification", id))?;
        notification.read = true;
        Ok(notification.clone())
    }

    /// Marks all of a participant's notifications read; returns how many changed
    pub fn mark_all_read(&self, recipient: ParticipantId) -> Result<usize, PortError> {
        let mut notifications = self
            .notifications
            .write()
            .map_err(|_| PortError::poisoned(OUTBOX))?;
        let mut marked = 0;
        for notification in notifications
            .iter_mut()
            .filter(|n| n.recipient == recipient && !n.read)
        {
            notification.read = true;
            marked += 1;
        }
        debug!(recipient = %recipient, marked, "Notifications marked read");
        Ok(marked)
    }
}

impl NotificationDispatcher for InMemoryOutbox {
    fn dispatch(&self, notification: Notification) {
        match self.notifications.write() {
            Ok(mut notifications) => {
                debug!(
                    notification_id = %notification.id,
                    recipient = %notification.recipient,
                    kind = ?notification.kind,
                    "Notification stored"
                );
                notifications.push(notification);
            }
            Err(_) => warn!(
                notification_id = %notification.id,
                "Notification dropped: outbox lock poisoned"
            ),
        }
    }
}

impl DomainPort for InMemoryOutbox {}

impl HealthCheckable for InMemoryOutbox {
    fn health_check(&self) -> HealthCheckResult {
        if self.notifications.is_poisoned() {
            HealthCheckResult::unhealthy("memory-notification-outbox", "lock poisoned")
        } else {
            HealthCheckResult::healthy("memory-notification-outbox")
        }
    }
}
