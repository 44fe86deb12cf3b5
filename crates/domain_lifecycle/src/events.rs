//! Lifecycle events
//!
//! The engine emits one event per committed change. Events carry the
//! participants who should hear about them, so notification fan-out needs no
//! further store reads once the item lock is released.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimRequestId, ItemId, ParticipantId, QuestionId};
use domain_item::{ItemStatus, ItemType};

/// Events emitted by the Lifecycle Engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LifecycleEvent {
    /// A new item has been reported
    ItemReported {
        item_id: ItemId,
        item_type: ItemType,
        category: String,
        timestamp: DateTime<Utc>,
    },

    /// A claimant asked to be recognised as owner
    ClaimSubmitted {
        item_id: ItemId,
        claim_id: ClaimRequestId,
        finder: Option<ParticipantId>,
        category: String,
        timestamp: DateTime<Utc>,
    },

    /// The finder sent a verification question
    QuestionAsked {
        item_id: ItemId,
        claim_id: ClaimRequestId,
        question_id: QuestionId,
        claimant: ParticipantId,
        category: String,
        timestamp: DateTime<Utc>,
    },

    /// The claimant answered a verification question
    QuestionAnswered {
        item_id: ItemId,
        claim_id: ClaimRequestId,
        question_id: QuestionId,
        finder: Option<ParticipantId>,
        category: String,
        timestamp: DateTime<Utc>,
    },

    /// Ownership confirmed; contact details exchanged
    ClaimVerified {
        item_id: ItemId,
        claim_id: ClaimRequestId,
        claimant: ParticipantId,
        category: String,
        timestamp: DateTime<Utc>,
    },

    /// The finder turned a claim down
    ClaimRejected {
        item_id: ItemId,
        claim_id: ClaimRequestId,
        claimant: ParticipantId,
        item_status: ItemStatus,
        category: String,
        timestamp: DateTime<Utc>,
    },

    /// Handover confirmed by the finder
    HandoverConfirmed {
        item_id: ItemId,
        owner: Option<ParticipantId>,
        category: String,
        timestamp: DateTime<Utc>,
    },

    /// Receipt confirmed by the owner
    RecoveryConfirmed {
        item_id: ItemId,
        finder: Option<ParticipantId>,
        category: String,
        timestamp: DateTime<Utc>,
    },

    /// The item was closed administratively
    ItemClosed {
        item_id: ItemId,
        reason: Option<String>,
        /// Reporter plus every claimant still waiting
        affected: Vec<ParticipantId>,
        category: String,
        timestamp: DateTime<Utc>,
    },
}

impl LifecycleEvent {
    /// Returns the item this event concerns
    pub fn item_id(&self) -> ItemId {
        match self {
            LifecycleEvent::ItemReported { item_id, .. } => *item_id,
            LifecycleEvent::ClaimSubmitted { item_id, .. } => *item_id,
            LifecycleEvent::QuestionAsked { item_id, .. } => *item_id,
            LifecycleEvent::QuestionAnswered { item_id, .. } => *item_id,
            LifecycleEvent::ClaimVerified { item_id, .. } => *item_id,
            LifecycleEvent::ClaimRejected { item_id, .. } => *item_id,
            LifecycleEvent::HandoverConfirmed { item_id, .. } => *item_id,
            LifecycleEvent::RecoveryConfirmed { item_id, .. } => *item_id,
            LifecycleEvent::ItemClosed { item_id, .. } => *item_id,
        }
    }

    /// Returns the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            LifecycleEvent::ItemReported { .. } => "ItemReported",
            LifecycleEvent::ClaimSubmitted { .. } => "ClaimSubmitted",
            LifecycleEvent::QuestionAsked { .. } => "QuestionAsked",
            LifecycleEvent::QuestionAnswered { .. } => "QuestionAnswered",
            LifecycleEvent::ClaimVerified { .. } => "ClaimVerified",
            LifecycleEvent::ClaimRejected { .. } => "ClaimRejected",
            LifecycleEvent::HandoverConfirmed { .. } => "HandoverConfirmed",
            LifecycleEvent::RecoveryConfirmed { .. } => "RecoveryConfirmed",
            LifecycleEvent::ItemClosed { .. } => "ItemClosed",
        }
    }

    /// Participants to notify about this event
    pub fn recipients(&self) -> Vec<ParticipantId> {
        match self {
            LifecycleEvent::ItemReported { .. } => Vec::new(),
            LifecycleEvent::ClaimSubmitted { finder, .. }
            | LifecycleEvent::QuestionAnswered { finder, .. }
            | LifecycleEvent::RecoveryConfirmed { finder, .. } => finder.iter().copied().collect(),
            LifecycleEvent::QuestionAsked { claimant, .. }
            | LifecycleEvent::ClaimVerified { claimant, .. }
            | LifecycleEvent::ClaimRejected { claimant, .. } => vec![*claimant],
            LifecycleEvent::HandoverConfirmed { owner, .. } => owner.iter().copied().collect(),
            LifecycleEvent::ItemClosed { affected, .. } => affected.clone(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            LifecycleEvent::ItemReported { timestamp, .. }
            | LifecycleEvent::ClaimSubmitted { timestamp, .. }
            | LifecycleEvent::QuestionAsked { timestamp, .. }
            | LifecycleEvent::QuestionAnswered { timestamp, .. }
            | LifecycleEvent::ClaimVerified { timestamp, .. }
            | LifecycleEvent::ClaimRejected { timestamp, .. }
            | LifecycleEvent::HandoverConfirmed { timestamp, .. }
            | LifecycleEvent::RecoveryConfirmed { timestamp, .. }
            | LifecycleEvent::ItemClosed { timestamp, .. } => *timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipients_follow_the_acting_party() {
        let finder = ParticipantId::new();
        let claimant = ParticipantId::new();
        let item_id = ItemId::new();
        let claim_id = ClaimRequestId::new();

        let submitted = LifecycleEvent::ClaimSubmitted {
            item_id,
            claim_id,
            finder: Some(finder),
            category: "Phone".to_string(),
            timestamp: Utc::now(),
        };
        assert_eq!(submitted.recipients(), vec![finder]);
        assert_eq!(submitted.item_id(), item_id);

        let verified = LifecycleEvent::ClaimVerified {
            item_id,
            claim_id,
            claimant,
            category: "Phone".to_string(),
            timestamp: Utc::now(),
        };
        assert_eq!(verified.recipients(), vec![claimant]);
        assert_eq!(verified.event_type(), "ClaimVerified");
    }

    #[test]
    fn test_reports_notify_nobody() {
        let event = LifecycleEvent::ItemReported {
            item_id: ItemId::new(),
            item_type: ItemType::Found,
            category: "Wallet".to_string(),
            timestamp: Utc::now(),
        };
        assert!(event.recipients().is_empty());
    }
}
