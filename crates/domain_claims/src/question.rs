//! Verification questions posed by finders

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimRequestId, ItemId, QuestionId};
use crate::claim::ClaimRequest;
use crate::error::ClaimError;

/// A question the finder sent to a claimant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationQuestion {
    pub id: QuestionId,
    pub claim_id: ClaimRequestId,
    pub item_id: ItemId,
    pub question: String,
    pub answer: Option<String>,
    pub asked_at: DateTime<Utc>,
    pub answered_at: Option<DateTime<Utc>>,
}

impl VerificationQuestion {
    /// Creates a question against a claim
    pub fn ask(claim: &ClaimRequest, question: impl Into<String>) -> Result<Self, ClaimError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(ClaimError::invalid("verification question is required"));
        }

        Ok(Self {
            id: QuestionId::new_v7(),
            claim_id: claim.id(),
            item_id: claim.item_id(),
            question,
            answer: None,
            asked_at: Utc::now(),
            answered_at: None,
        })
    }

    pub fn is_answered(&self) -> bool {
        self.answer.is_some()
    }

    /// Records the claimant's answer; a question is answered once
    pub fn answer(&mut self, answer: impl Into<String>) -> Result<(), ClaimError> {
        let answer = answer.into();
        if answer.trim().is_empty() {
            return Err(ClaimError::invalid("answer is required"));
        }
        if self.is_answered() {
            return Err(ClaimError::QuestionAlreadyAnswered(self.id.to_string()));
        }
        self.answer = Some(answer);
        self.answered_at = Some(Utc::now());
        Ok(())
    }
}
