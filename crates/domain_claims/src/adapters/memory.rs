//! In-memory claim ledger

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use core_kernel::{
    ClaimRequestId, DomainPort, HealthCheckResult, HealthCheckable, ItemId, PortError, QuestionId,
};

use crate::claim::ClaimRequest;
use crate::ports::ClaimLedger;
use crate::question::VerificationQuestion;

const STORE: &str = "claim ledger";

#[derive(Debug, Default)]
struct LedgerState {
    claims: HashMap<ClaimRequestId, ClaimRequest>,
    by_item: HashMap<ItemId, Vec<ClaimRequestId>>,
    questions: HashMap<QuestionId, VerificationQuestion>,
    by_claim: HashMap<ClaimRequestId, Vec<QuestionId>>,
}

/// In-memory implementation of ClaimLedger
#[derive(Debug, Default)]
pub struct InMemoryClaimLedger {
    state: RwLock<LedgerState>,
}

impl InMemoryClaimLedger {
    /// Creates an empty ledger
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainPort for InMemoryClaimLedger {}

impl HealthCheckable for InMemoryClaimLedger {
    fn health_check(&self) -> HealthCheckResult {
        if self.state.is_poisoned() {
            HealthCheckResult::unhealthy("memory-claim-ledger", "lock poisoned")
        } else {
            HealthCheckResult::healthy("memory-claim-ledger")
        }
    }
}

impl ClaimLedger for InMemoryClaimLedger {
    fn insert(&self, claim: ClaimRequest) -> Result<(), PortError> {
        let mut state = self.state.write().map_err(|_| PortError::poisoned(STORE))?;
        if state.claims.contains_key(&claim.id()) {
            return Err(PortError::conflict(format!("claim {} already exists", claim.id())));
        }
        debug!(claim_id = %claim.id(), item_id = %claim.item_id(), "Claim stored");
        state.by_item.entry(claim.item_id()).or_default().push(claim.id());
        state.claims.insert(claim.id(), claim);
        Ok(())
    }

    fn get(&self, id: ClaimRequestId) -> Result<ClaimRequest, PortError> {
        self.state
            .read()
            .map_err(|_| PortError::poisoned(STORE))?
            .claims
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Claim", id))
    }

    fn replace(&self, claim: ClaimRequest) -> Result<(), PortError> {
        let mut state = self.state.write().map_err(|_| PortError::poisoned(STORE))?;
        let slot = state
            .claims
            .get_mut(&claim.id())
            .ok_or_else(|| PortError::not_found("Claim", claim.id()))?;
        debug!(claim_id = %claim.id(), status = %claim.status(), "Claim replaced");
        *slot = claim;
        Ok(())
    }

    fn claims_for_item(&self, item_id: ItemId) -> Result<Vec<ClaimRequest>, PortError> {
        let state = self.state.read().map_err(|_| PortError::poisoned(STORE))?;
        Ok(state
            .by_item
            .get(&item_id)
            .map(|ids| ids.iter().filter_map(|id| state.claims.get(id).cloned()).collect())
            .unwrap_or_default())
    }

    fn insert_question(&self, question: VerificationQuestion) -> Result<(), PortError> {
        let mut state = self.state.write().map_err(|_| PortError::poisoned(STORE))?;
        if !state.claims.contains_key(&question.claim_id) {
            return Err(PortError::not_found("Claim", question.claim_id));
        }
        if state.questions.contains_key(&question.id) {
            return Err(PortError::conflict(format!("question {} already exists", question.id)));
        }
        state.by_claim.entry(question.claim_id).or_default().push(question.id);
        state.questions.insert(question.id, question);
        Ok(())
    }

    fn get_question(&self, id: QuestionId) -> Result<VerificationQuestion, PortError> {
        self.state
            .read()
            .map_err(|_| PortError::poisoned(STORE))?
            .questions
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Question", id))
    }

    fn replace_question(&self, question: VerificationQuestion) -> Result<(), PortError> {
        let mut state = self.state.write().map_err(|_| PortError::poisoned(STORE))?;
        let slot = state
            .questions
            .get_mut(&question.id)
            .ok_or_else(|| PortError::not_found("Question", question.id))?;
        *slot = question;
        Ok(())
    }

    fn questions_for_claim(
        &self,
        claim_id: ClaimRequestId,
    ) -> Result<Vec<VerificationQuestion>, PortError> {
        let state = self.state.read().map_err(|_| PortError::poisoned(STORE))?;
        Ok(state
            .by_claim
            .get(&claim_id)
            .map(|ids| ids.iter().filter_map(|id| state.questions.get(id).cloned()).collect())
            .unwrap_or_default())
    }
}
