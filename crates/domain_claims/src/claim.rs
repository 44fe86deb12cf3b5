//! Claim request aggregate

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimRequestId, ItemId, ParticipantId};
use crate::error::ClaimError;

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    /// Awaiting the finder's decision
    Pending,
    /// Finder confirmed the claimant is the owner
    Verified,
    /// Finder turned the claim down
    Rejected,
}

impl ClaimStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, ClaimStatus::Pending)
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClaimStatus::Pending => "pending",
            ClaimStatus::Verified => "verified",
            ClaimStatus::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

/// Who is claiming, and how to reach them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimantInfo {
    pub claimant_id: ParticipantId,
    pub email: String,
    pub phone: Option<String>,
}

impl ClaimantInfo {
    pub fn new(claimant_id: ParticipantId, email: impl Into<String>) -> Self {
        Self {
            claimant_id,
            email: email.into(),
            phone: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// A claimant's assertion of ownership over one item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimRequest {
    id: ClaimRequestId,
    item_id: ItemId,
    pub claimant_id: ParticipantId,
    pub claimant_email: String,
    pub claimant_phone: Option<String>,
    /// Why the claimant believes the item is theirs
    pub message: String,
    /// Answers to the finder's questions, in the order they were given
    pub verification_answers: Vec<String>,
    status: ClaimStatus,
    created_at: DateTime<Utc>,
    /// When the claim was verified or rejected
    pub decided_at: Option<DateTime<Utc>>,
}

impl ClaimRequest {
    /// Creates a new pending claim
    ///
    /// Email and message are required; blank phone numbers are dropped.
    pub fn submit(
        item_id: ItemId,
        claimant: ClaimantInfo,
        message: impl Into<String>,
    ) -> Result<Self, ClaimError> {
        let message = message.into();
        let email = claimant.email.trim().to_string();

        if email.is_empty() || message.trim().is_empty() {
            return Err(ClaimError::invalid("email and message are required"));
        }

        let phone = claimant
            .phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        Ok(Self {
            id: ClaimRequestId::new_v7(),
            item_id,
            claimant_id: claimant.claimant_id,
            claimant_email: email,
            claimant_phone: phone,
            message,
            verification_answers: Vec::new(),
            status: ClaimStatus::Pending,
            created_at: Utc::now(),
            decided_at: None,
        })
    }

    pub fn id(&self) -> ClaimRequestId {
        self.id
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn status(&self) -> ClaimStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_pending(&self) -> bool {
        self.status == ClaimStatus::Pending
    }

    /// Marks the claim verified
    pub fn verify(&mut self) -> Result<(), ClaimError> {
        self.decide(ClaimStatus::Verified)
    }

    /// Marks the claim rejected
    pub fn reject(&mut self) -> Result<(), ClaimError> {
        self.decide(ClaimStatus::Rejected)
    }

    /// Appends an answer to a finder's question
    pub fn record_answer(&mut self, answer: impl Into<String>) -> Result<(), ClaimError> {
        self.ensure_pending(ClaimStatus::Pending)?;
        self.verification_answers.push(answer.into());
        Ok(())
    }

    fn decide(&mut self, target: ClaimStatus) -> Result<(), ClaimError> {
        self.ensure_pending(target)?;
        self.status = target;
        self.decided_at = Some(Utc::now());
        Ok(())
    }

    fn ensure_pending(&self, target: ClaimStatus) -> Result<(), ClaimError> {
        if !self.is_pending() {
            return Err(ClaimError::InvalidStatusTransition {
                from: self.status.to_string(),
                to: target.to_string(),
            });
        }
        Ok(())
    }
}

/// Every claim on one item, in submission order
#[derive(Debug, Clone, Default)]
pub struct ClaimsOnItem(Vec<ClaimRequest>);

impl ClaimsOnItem {
    pub fn new(claims: Vec<ClaimRequest>) -> Self {
        Self(claims)
    }

    pub fn pending_count(&self) -> usize {
        self.count(ClaimStatus::Pending)
    }

    pub fn verified_count(&self) -> usize {
        self.count(ClaimStatus::Verified)
    }

    /// The verified claim, if exactly one exists
    pub fn single_verified(&self) -> Option<&ClaimRequest> {
        let mut verified = self.0.iter().filter(|c| c.status() == ClaimStatus::Verified);
        match (verified.next(), verified.next()) {
            (Some(claim), None) => Some(claim),
            _ => None,
        }
    }

    /// Whether this claimant already has an open claim on the item
    pub fn has_pending_from(&self, claimant: ParticipantId) -> bool {
        self.0
            .iter()
            .any(|c| c.is_pending() && c.claimant_id == claimant)
    }

    pub fn as_slice(&self) -> &[ClaimRequest] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<ClaimRequest> {
        self.0
    }

    fn count(&self, status: ClaimStatus) -> usize {
        self.0.iter().filter(|c| c.status() == status).count()
    }
}
