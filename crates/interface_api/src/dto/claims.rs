//! Claim DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{ClaimRequestId, ItemId, ParticipantId};
use domain_claims::{ClaimRequest, ClaimStatus, ClaimantInfo};
use domain_item::ItemStatus;
use domain_lifecycle::RejectOutcome;

#[derive(Debug, Deserialize, Validate)]
pub struct SubmitClaimRequest {
    pub claimant_id: ParticipantId,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
}

impl SubmitClaimRequest {
    /// Splits into claimant details and the message
    pub fn into_parts(self) -> (ClaimantInfo, String) {
        let mut claimant = ClaimantInfo::new(self.claimant_id, self.email);
        if let Some(phone) = self.phone {
            claimant = claimant.with_phone(phone);
        }
        (claimant, self.message)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct AskQuestionRequest {
    #[validate(length(min = 1, max = 500))]
    pub question: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AnswerQuestionRequest {
    #[validate(length(min = 1, max = 2000))]
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub id: ClaimRequestId,
    pub item_id: ItemId,
    pub claimant_id: ParticipantId,
    pub claimant_email: String,
    pub claimant_phone: Option<String>,
    pub message: String,
    pub verification_answers: Vec<String>,
    pub status: ClaimStatus,
    pub created_at: DateTime<Utc>,
    pub decided_at: Option<DateTime<Utc>>,
}

impl From<ClaimRequest> for ClaimResponse {
    fn from(claim: ClaimRequest) -> Self {
        Self {
            id: claim.id(),
            item_id: claim.item_id(),
            status: claim.status(),
            created_at: claim.created_at(),
            claimant_id: claim.claimant_id,
            claimant_email: claim.claimant_email,
            claimant_phone: claim.claimant_phone,
            message: claim.message,
            verification_answers: claim.verification_answers,
            decided_at: claim.decided_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RejectResponse {
    pub claim: ClaimResponse,
    pub item_status: ItemStatus,
}

impl From<RejectOutcome> for RejectResponse {
    fn from(outcome: RejectOutcome) -> Self {
        Self {
            claim: outcome.claim.into(),
            item_status: outcome.item_status,
        }
    }
}
