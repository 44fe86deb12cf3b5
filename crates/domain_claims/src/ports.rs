//! Claim Ledger Port
//!
//! The ledger owns claim records and the verification questions attached to
//! them. Each claim holds a plain `ItemId` back-reference; the ledger keeps a
//! per-item index in submission order, which the lifecycle engine relies on
//! for its "any pending claims left" checks.

use core_kernel::{ClaimRequestId, DomainPort, HealthCheckable, ItemId, PortError, QuestionId};

use crate::claim::ClaimRequest;
use crate::question::VerificationQuestion;

/// Storage port for claims and their questions
pub trait ClaimLedger: DomainPort + HealthCheckable {
    /// Stores a new claim, appending it to its item's index
    fn insert(&self, claim: ClaimRequest) -> Result<(), PortError>;

    /// Returns a claim by id
    fn get(&self, id: ClaimRequestId) -> Result<ClaimRequest, PortError>;

    /// Replaces an existing claim record
    fn replace(&self, claim: ClaimRequest) -> Result<(), PortError>;

    /// All claims on an item, in submission order
    fn claims_for_item(&self, item_id: ItemId) -> Result<Vec<ClaimRequest>, PortError>;

    /// Stores a new question
    fn insert_question(&self, question: VerificationQuestion) -> Result<(), PortError>;

    /// Returns a question by id
    fn get_question(&self, id: QuestionId) -> Result<VerificationQuestion, PortError>;

    /// Replaces an existing question record
    fn replace_question(&self, question: VerificationQuestion) -> Result<(), PortError>;

    /// Questions on a claim, in the order they were asked
    fn questions_for_claim(
        &self,
        claim_id: ClaimRequestId,
    ) -> Result<Vec<VerificationQuestion>, PortError>;
}
