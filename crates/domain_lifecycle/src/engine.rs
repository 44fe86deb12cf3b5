//! Lifecycle Engine
//!
//! The engine is the only writer of item status and claim status. Each
//! mutating operation:
//!
//! 1. Takes the item's lock
//! 2. Re-reads the item and its claims
//! 3. Applies the change to local copies, failing before any write if the
//!    transition is not allowed
//! 4. Writes the records back, restoring the first record if the second
//!    write fails
//! 5. Releases the lock, then publishes events and notifications

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use core_kernel::{
    ClaimRequestId, HealthCheckResult, ItemId, ParticipantId, QuestionId,
};
use domain_claims::{
    ClaimLedger, ClaimRequest, ClaimantInfo, ClaimsOnItem, ContactExchange, ContactInfo,
    InMemoryClaimLedger, VerificationQuestion,
};
use domain_item::{
    InMemoryItemRegistry, Item, ItemQuery, ItemRegistry, ItemStatus, NewItem, PublicItemView,
};

use crate::badges::HelperBadgeTally;
use crate::directory::{ContactDirectory, InMemoryContactDirectory};
use crate::error::LifecycleError;
use crate::events::LifecycleEvent;
use crate::locks::ItemLocks;
use crate::notifications::{LoggingDispatcher, Notification, NotificationDispatcher};

type Committed<T> = Result<(T, Vec<LifecycleEvent>), LifecycleError>;

/// Result of rejecting a claim
#[derive(Debug, Clone)]
pub struct RejectOutcome {
    pub claim: ClaimRequest,
    /// Item status after the rejection
    pub item_status: ItemStatus,
}

/// Drives items and claims through their lifecycles
pub struct LifecycleEngine {
    items: Arc<dyn ItemRegistry>,
    claims: Arc<dyn ClaimLedger>,
    directory: Arc<dyn ContactDirectory>,
    notifier: Arc<dyn NotificationDispatcher>,
    badges: HelperBadgeTally,
    locks: ItemLocks,
}

/// Builder for [`LifecycleEngine`]
///
/// Anything not supplied falls back to an in-memory adapter, and
/// notifications fall back to the logging dispatcher.
#[derive(Default)]
pub struct LifecycleEngineBuilder {
    items: Option<Arc<dyn ItemRegistry>>,
    claims: Option<Arc<dyn ClaimLedger>>,
    directory: Option<Arc<dyn ContactDirectory>>,
    notifier: Option<Arc<dyn NotificationDispatcher>>,
}

impl LifecycleEngineBuilder {
    pub fn items(mut self, items: Arc<dyn ItemRegistry>) -> Self {
        self.items = Some(items);
        self
    }

    pub fn claims(mut self, claims: Arc<dyn ClaimLedger>) -> Self {
        self.claims = Some(claims);
        self
    }

    pub fn directory(mut self, directory: Arc<dyn ContactDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn NotificationDispatcher>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn build(self) -> LifecycleEngine {
        LifecycleEngine {
            items: self
                .items
                .unwrap_or_else(|| Arc::new(InMemoryItemRegistry::new())),
            claims: self
                .claims
                .unwrap_or_else(|| Arc::new(InMemoryClaimLedger::new())),
            directory: self
                .directory
                .unwrap_or_else(|| Arc::new(InMemoryContactDirectory::new())),
            notifier: self.notifier.unwrap_or_else(|| Arc::new(LoggingDispatcher)),
            badges: HelperBadgeTally::new(),
            locks: ItemLocks::new(),
        }
    }
}

impl LifecycleEngine {
    pub fn builder() -> LifecycleEngineBuilder {
        LifecycleEngineBuilder::default()
    }

    /// Engine over fresh in-memory stores with logged notifications
    pub fn in_memory() -> Self {
        Self::builder().build()
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Reports a new item; it starts Active
    pub fn report_item(&self, new_item: NewItem) -> Result<Item, LifecycleError> {
        self.finish("report_item", self.run_report_item(new_item))
    }

    /// Submits an ownership claim against a found or anonymous item
    ///
    /// The first claim moves an Active item to Verification Pending. Further
    /// claims are accepted while the item is Verification Pending and no
    /// claim on it has been verified.
    ///
    /// # Errors
    ///
    /// - `Validation` if the email or message is blank
    /// - `NotFound` if the item is unknown
    /// - `InvalidState` if the item is lost, not open for claims, or the
    ///   claimant already has a pending claim on it
    pub fn submit_claim(
        &self,
        item_id: ItemId,
        claimant: ClaimantInfo,
        message: impl Into<String>,
    ) -> Result<ClaimRequest, LifecycleError> {
        let message = message.into();
        self.finish(
            "submit_claim",
            self.run_submit_claim(item_id, claimant, message),
        )
    }

    /// Verifies a pending claim and exchanges contact details
    ///
    /// The item stays Verification Pending; its owner and contact fields
    /// are taken from the claimant. The finder's details come from the
    /// contact directory and may be absent.
    pub fn verify_claim(&self, claim_id: ClaimRequestId) -> Result<ContactExchange, LifecycleError> {
        self.finish("verify_claim", self.run_verify_claim(claim_id))
    }

    /// Rejects a pending claim
    ///
    /// The item returns to Active once no pending or verified claim remains.
    /// A rejection never closes the item and never touches sibling claims.
    pub fn reject_claim(&self, claim_id: ClaimRequestId) -> Result<RejectOutcome, LifecycleError> {
        self.finish("reject_claim", self.run_reject_claim(claim_id))
    }

    /// Sends a verification question to the claimant of a pending claim
    pub fn ask_question(
        &self,
        claim_id: ClaimRequestId,
        question: impl Into<String>,
    ) -> Result<VerificationQuestion, LifecycleError> {
        let question = question.into();
        self.finish("ask_question", self.run_ask_question(claim_id, question))
    }

    /// Records the claimant's answer to a question
    pub fn answer_question(
        &self,
        question_id: QuestionId,
        answer: impl Into<String>,
    ) -> Result<VerificationQuestion, LifecycleError> {
        let answer = answer.into();
        self.finish("answer_question", self.run_answer_question(question_id, answer))
    }

    /// Finder confirms the item was handed over to the verified owner
    pub fn confirm_handover(&self, item_id: ItemId) -> Result<Item, LifecycleError> {
        self.finish("confirm_handover", self.run_confirm_handover(item_id))
    }

    /// Owner confirms receipt; the finder earns a helper badge credit
    pub fn confirm_recovery(&self, item_id: ItemId) -> Result<Item, LifecycleError> {
        let item = self.finish("confirm_recovery", self.run_confirm_recovery(item_id))?;
        if let Some(finder) = item.finder_id {
            self.award_helper_badge(finder, item.id());
        }
        Ok(item)
    }

    /// Closes a non-terminal item; pending claims are left as they are
    pub fn close_item(
        &self,
        item_id: ItemId,
        reason: Option<String>,
    ) -> Result<Item, LifecycleError> {
        let reason = reason
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());
        self.finish("close_item", self.run_close_item(item_id, reason))
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn get_item(&self, item_id: ItemId) -> Result<Item, LifecycleError> {
        Ok(self.items.get(item_id)?)
    }

    /// The item as anyone may see it; anonymous items stay redacted until a
    /// claim on them is verified
    pub fn get_public_item(&self, item_id: ItemId) -> Result<PublicItemView, LifecycleError> {
        let item = self.items.get(item_id)?;
        self.public_view(&item)
    }

    /// Items matching a query, newest first
    pub fn find_items(&self, query: &ItemQuery) -> Result<Vec<Item>, LifecycleError> {
        Ok(self.items.find(query)?)
    }

    /// Public views of the items matching a query
    ///
    /// Free text is matched against each public view rather than the stored
    /// record, so hidden details of anonymous items are not searchable.
    /// Pagination applies after that match.
    pub fn public_listing(&self, query: &ItemQuery) -> Result<Vec<PublicItemView>, LifecycleError> {
        let needle = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty());

        let Some(needle) = needle else {
            return self
                .items
                .find(query)?
                .iter()
                .map(|item| self.public_view(item))
                .collect();
        };

        let unpaged = ItemQuery {
            search: None,
            limit: None,
            offset: None,
            ..query.clone()
        };
        let offset = query.offset.unwrap_or(0) as usize;
        let limit = query.limit.map(|l| l as usize).unwrap_or(usize::MAX);

        let mut views = Vec::new();
        for item in self.items.find(&unpaged)? {
            let view = self.public_view(&item)?;
            if view.matches_text(needle) {
                views.push(view);
            }
        }
        Ok(views.into_iter().skip(offset).take(limit).collect())
    }

    /// Claims on an item, in submission order
    pub fn get_claims(&self, item_id: ItemId) -> Result<Vec<ClaimRequest>, LifecycleError> {
        self.items.get(item_id)?;
        Ok(self.claims.claims_for_item(item_id)?)
    }

    pub fn get_claim(&self, claim_id: ClaimRequestId) -> Result<ClaimRequest, LifecycleError> {
        Ok(self.claims.get(claim_id)?)
    }

    /// Questions on a claim, in the order they were asked
    pub fn questions_for(
        &self,
        claim_id: ClaimRequestId,
    ) -> Result<Vec<VerificationQuestion>, LifecycleError> {
        self.claims.get(claim_id)?;
        Ok(self.claims.questions_for_claim(claim_id)?)
    }

    /// Contact details exchanged for the item's verified claim
    pub fn contact_exchange(&self, item_id: ItemId) -> Result<ContactExchange, LifecycleError> {
        let item = self.items.get(item_id)?;
        let claims = ClaimsOnItem::new(self.claims.claims_for_item(item_id)?);
        let verified = claims.single_verified().ok_or_else(|| {
            LifecycleError::invalid_state(format!("item {} has no verified claim", item_id))
        })?;
        Ok(ContactExchange::for_verified_claim(
            verified,
            self.finder_contact(&item),
        )?)
    }

    /// Helper badge credits a participant has earned
    pub fn helper_badges(&self, participant: ParticipantId) -> Result<u32, LifecycleError> {
        Ok(self.badges.count(participant)?)
    }

    /// Health of every store behind the engine
    pub fn health_checks(&self) -> Vec<HealthCheckResult> {
        vec![
            self.items.health_check(),
            self.claims.health_check(),
            self.directory.health_check(),
        ]
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    fn run_report_item(&self, new_item: NewItem) -> Committed<Item> {
        let item = Item::report(new_item)?;
        self.items.insert(item.clone())?;

        info!(
            item_id = %item.id(),
            item_type = %item.item_type(),
            status = %item.status(),
            "Item reported"
        );

        let event = LifecycleEvent::ItemReported {
            item_id: item.id(),
            item_type: item.item_type(),
            category: item.details().category.clone(),
            timestamp: Utc::now(),
        };
        Ok((item, vec![event]))
    }

    fn run_submit_claim(
        &self,
        item_id: ItemId,
        claimant: ClaimantInfo,
        message: String,
    ) -> Committed<ClaimRequest> {
        let claim = ClaimRequest::submit(item_id, claimant, message)?;

        self.locks.with_item(item_id, || {
            let mut item = self.items.get(item_id)?;

            if !item.item_type().accepts_claims() {
                return Err(LifecycleError::invalid_state(format!(
                    "{} items do not accept claims",
                    item.item_type()
                )));
            }
            if item.finder_id == Some(claim.claimant_id) {
                return Err(LifecycleError::invalid_state(
                    "the finder cannot claim their own item",
                ));
            }

            let existing = ClaimsOnItem::new(self.claims.claims_for_item(item_id)?);
            match item.status() {
                ItemStatus::Active => {}
                ItemStatus::VerificationPending if existing.verified_count() == 0 => {}
                status => {
                    return Err(LifecycleError::invalid_state(format!(
                        "item is {} and not accepting claims",
                        status
                    )))
                }
            }
            if existing.has_pending_from(claim.claimant_id) {
                return Err(LifecycleError::invalid_state(
                    "claimant already has a pending claim on this item",
                ));
            }

            let original = item.clone();
            let advanced = item.status() == ItemStatus::Active;
            if advanced {
                item.transition_to(ItemStatus::VerificationPending)?;
                self.items.replace(item.clone())?;
            }
            if let Err(err) = self.claims.insert(claim.clone()) {
                if advanced {
                    self.restore_item(original);
                }
                return Err(err.into());
            }

            info!(
                item_id = %item_id,
                claim_id = %claim.id(),
                claimant = %claim.claimant_id,
                status = %item.status(),
                "Claim submitted"
            );

            let event = LifecycleEvent::ClaimSubmitted {
                item_id,
                claim_id: claim.id(),
                finder: item.finder_id,
                category: item.details().category.clone(),
                timestamp: Utc::now(),
            };
            Ok((claim, vec![event]))
        })
    }

    fn run_verify_claim(&self, claim_id: ClaimRequestId) -> Committed<ContactExchange> {
        let item_id = self.claims.get(claim_id)?.item_id();

        self.locks.with_item(item_id, || {
            let mut claim = self.claims.get(claim_id)?;
            let mut item = self.items.get(item_id)?;

            ensure_pending(&claim)?;
            if item.status() != ItemStatus::VerificationPending {
                return Err(LifecycleError::invalid_state(format!(
                    "item is {}, claims can only be verified while Verification Pending",
                    item.status()
                )));
            }
            let claims = ClaimsOnItem::new(self.claims.claims_for_item(item_id)?);
            if claims.verified_count() > 0 {
                return Err(LifecycleError::invalid_state(
                    "another claim on this item is already verified",
                ));
            }

            let original = claim.clone();
            claim.verify()?;
            item.record_owner_contact(
                claim.claimant_id,
                claim.claimant_email.clone(),
                claim.claimant_phone.clone(),
            );

            self.claims.replace(claim.clone())?;
            if let Err(err) = self.items.replace(item.clone()) {
                self.restore_claim(original);
                return Err(err.into());
            }

            info!(
                item_id = %item_id,
                claim_id = %claim_id,
                owner = %claim.claimant_id,
                "Claim verified"
            );

            let exchange =
                ContactExchange::for_verified_claim(&claim, self.finder_contact(&item))?;
            let event = LifecycleEvent::ClaimVerified {
                item_id,
                claim_id,
                claimant: claim.claimant_id,
                category: item.details().category.clone(),
                timestamp: Utc::now(),
            };
            Ok((exchange, vec![event]))
        })
    }

    fn run_reject_claim(&self, claim_id: ClaimRequestId) -> Committed<RejectOutcome> {
        let item_id = self.claims.get(claim_id)?.item_id();

        self.locks.with_item(item_id, || {
            let mut claim = self.claims.get(claim_id)?;
            let mut item = self.items.get(item_id)?;

            ensure_pending(&claim)?;

            let others = ClaimsOnItem::new(
                self.claims
                    .claims_for_item(item_id)?
                    .into_iter()
                    .filter(|c| c.id() != claim_id)
                    .collect(),
            );
            let revert = item.status() == ItemStatus::VerificationPending
                && others.pending_count() == 0
                && others.verified_count() == 0;

            let original = claim.clone();
            claim.reject()?;
            if revert {
                item.transition_to(ItemStatus::Active)?;
            }

            self.claims.replace(claim.clone())?;
            if revert {
                if let Err(err) = self.items.replace(item.clone()) {
                    self.restore_claim(original);
                    return Err(err.into());
                }
            }

            info!(
                item_id = %item_id,
                claim_id = %claim_id,
                status = %item.status(),
                pending_left = others.pending_count(),
                "Claim rejected"
            );

            let event = LifecycleEvent::ClaimRejected {
                item_id,
                claim_id,
                claimant: claim.claimant_id,
                item_status: item.status(),
                category: item.details().category.clone(),
                timestamp: Utc::now(),
            };
            let outcome = RejectOutcome {
                claim,
                item_status: item.status(),
            };
            Ok((outcome, vec![event]))
        })
    }

    fn run_ask_question(
        &self,
        claim_id: ClaimRequestId,
        text: String,
    ) -> Committed<VerificationQuestion> {
        if text.trim().is_empty() {
            return Err(LifecycleError::validation("verification question is required"));
        }
        let item_id = self.claims.get(claim_id)?.item_id();

        self.locks.with_item(item_id, || {
            let claim = self.claims.get(claim_id)?;
            ensure_pending(&claim)?;
            let item = self.items.get(item_id)?;
            ensure_under_review(&item)?;

            let question = VerificationQuestion::ask(&claim, text.trim())?;
            self.claims.insert_question(question.clone())?;

            info!(
                item_id = %item_id,
                claim_id = %claim_id,
                question_id = %question.id,
                "Verification question asked"
            );

            let event = LifecycleEvent::QuestionAsked {
                item_id,
                claim_id,
                question_id: question.id,
                claimant: claim.claimant_id,
                category: item.details().category.clone(),
                timestamp: Utc::now(),
            };
            Ok((question, vec![event]))
        })
    }

    fn run_answer_question(
        &self,
        question_id: QuestionId,
        answer: String,
    ) -> Committed<VerificationQuestion> {
        let answer = answer.trim().to_string();
        if answer.is_empty() {
            return Err(LifecycleError::validation("answer is required"));
        }
        let item_id = self.claims.get_question(question_id)?.item_id;

        self.locks.with_item(item_id, || {
            let mut question = self.claims.get_question(question_id)?;
            let mut claim = self.claims.get(question.claim_id)?;
            let item = self.items.get(item_id)?;

            ensure_pending(&claim)?;
            ensure_under_review(&item)?;
            let original = question.clone();
            question.answer(answer.clone())?;
            claim.record_answer(answer)?;

            self.claims.replace_question(question.clone())?;
            if let Err(err) = self.claims.replace(claim.clone()) {
                if let Err(restore) = self.claims.replace_question(original) {
                    error!(question_id = %question_id, error = %restore, "Failed to restore question");
                }
                return Err(err.into());
            }

            info!(
                item_id = %item_id,
                claim_id = %claim.id(),
                question_id = %question_id,
                answers = claim.verification_answers.len(),
                "Verification question answered"
            );

            let event = LifecycleEvent::QuestionAnswered {
                item_id,
                claim_id: claim.id(),
                question_id,
                finder: item.finder_id,
                category: item.details().category.clone(),
                timestamp: Utc::now(),
            };
            Ok((question, vec![event]))
        })
    }

    fn run_confirm_handover(&self, item_id: ItemId) -> Committed<Item> {
        self.locks.with_item(item_id, || {
            let mut item = self.items.get(item_id)?;
            if item.status() != ItemStatus::VerificationPending {
                return Err(LifecycleError::invalid_state(format!(
                    "item is {}, handover needs Verification Pending",
                    item.status()
                )));
            }
            let claims = ClaimsOnItem::new(self.claims.claims_for_item(item_id)?);
            if claims.single_verified().is_none() {
                return Err(LifecycleError::invalid_state(
                    "handover needs exactly one verified claim",
                ));
            }

            item.transition_to(ItemStatus::ItemOnItsWay)?;
            self.items.replace(item.clone())?;

            info!(item_id = %item_id, status = %item.status(), "Handover confirmed");

            let event = LifecycleEvent::HandoverConfirmed {
                item_id,
                owner: item.owner_id,
                category: item.details().category.clone(),
                timestamp: Utc::now(),
            };
            Ok((item, vec![event]))
        })
    }

    fn run_confirm_recovery(&self, item_id: ItemId) -> Committed<Item> {
        self.locks.with_item(item_id, || {
            let mut item = self.items.get(item_id)?;
            if item.status() != ItemStatus::ItemOnItsWay {
                return Err(LifecycleError::invalid_state(format!(
                    "item is {}, recovery needs Item on its way",
                    item.status()
                )));
            }

            item.transition_to(ItemStatus::Recovered)?;
            self.items.replace(item.clone())?;

            info!(item_id = %item_id, status = %item.status(), "Recovery confirmed");

            let event = LifecycleEvent::RecoveryConfirmed {
                item_id,
                finder: item.finder_id,
                category: item.details().category.clone(),
                timestamp: Utc::now(),
            };
            Ok((item, vec![event]))
        })
    }

    fn run_close_item(&self, item_id: ItemId, reason: Option<String>) -> Committed<Item> {
        self.locks.with_item(item_id, || {
            let mut item = self.items.get(item_id)?;
            if item.status().is_terminal() {
                return Err(LifecycleError::invalid_state(format!(
                    "item is already {}",
                    item.status()
                )));
            }

            item.transition_to(ItemStatus::Closed)?;
            self.items.replace(item.clone())?;

            info!(item_id = %item_id, reason = ?reason, "Item closed");

            let mut affected: Vec<ParticipantId> =
                item.owner_id.into_iter().chain(item.finder_id).collect();
            for claim in self.claims.claims_for_item(item_id)? {
                if claim.is_pending() && !affected.contains(&claim.claimant_id) {
                    affected.push(claim.claimant_id);
                }
            }

            let event = LifecycleEvent::ItemClosed {
                item_id,
                reason,
                affected,
                category: item.details().category.clone(),
                timestamp: Utc::now(),
            };
            Ok((item, vec![event]))
        })
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    /// Logs refusals and publishes the events of committed changes
    fn finish<T>(&self, operation: &'static str, result: Committed<T>) -> Result<T, LifecycleError> {
        match result {
            Ok((value, events)) => {
                for event in &events {
                    self.publish(event);
                }
                Ok(value)
            }
            Err(err) => {
                warn!(operation, kind = %err.kind(), error = %err, "Operation refused");
                Err(err)
            }
        }
    }

    fn publish(&self, event: &LifecycleEvent) {
        info!(
            event_type = event.event_type(),
            item_id = %event.item_id(),
            "Lifecycle event"
        );
        for notification in Notification::fan_out(event) {
            self.notifier.dispatch(notification);
        }
    }

    fn public_view(&self, item: &Item) -> Result<PublicItemView, LifecycleError> {
        let claims = ClaimsOnItem::new(self.claims.claims_for_item(item.id())?);
        Ok(PublicItemView::of(item, claims.verified_count() > 0))
    }

    fn finder_contact(&self, item: &Item) -> Option<ContactInfo> {
        let finder = item.finder_id?;
        match self.directory.contact_for(finder) {
            Ok(contact) => contact,
            Err(err) => {
                warn!(item_id = %item.id(), finder = %finder, error = %err, "Finder contact lookup failed");
                None
            }
        }
    }

    fn award_helper_badge(&self, finder: ParticipantId, item_id: ItemId) {
        match self.badges.award(finder) {
            Ok(total) => info!(finder = %finder, item_id = %item_id, total, "Helper badge awarded"),
            Err(err) => warn!(finder = %finder, item_id = %item_id, error = %err, "Helper badge not recorded"),
        }
    }

    fn restore_item(&self, original: Item) {
        let item_id = original.id();
        if let Err(err) = self.items.replace(original) {
            error!(item_id = %item_id, error = %err, "Failed to restore item");
        }
    }

    fn restore_claim(&self, original: ClaimRequest) {
        let claim_id = original.id();
        if let Err(err) = self.claims.replace(original) {
            error!(claim_id = %claim_id, error = %err, "Failed to restore claim");
        }
    }
}

/// Questions are only exchanged while the item awaits the finder's decision
fn ensure_under_review(item: &Item) -> Result<(), LifecycleError> {
    if item.status() != ItemStatus::VerificationPending {
        return Err(LifecycleError::invalid_state(format!(
            "item {} is {}; verification questions are closed",
            item.id(),
            item.status()
        )));
    }
    Ok(())
}

fn ensure_pending(claim: &ClaimRequest) -> Result<(), LifecycleError> {
    if !claim.is_pending() {
        return Err(LifecycleError::invalid_state(format!(
            "claim {} is already {}",
            claim.id(),
            claim.status()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::ErrorKind;
    use domain_item::{ItemDetails, ItemType};

    fn new_item(item_type: ItemType, reporter: ParticipantId) -> NewItem {
        NewItem {
            item_type,
            details: ItemDetails {
                category: "Keys".to_string(),
                description: "Three keys on a red ring".to_string(),
                brand: None,
                color: Some("Red".to_string()),
                location: "Library".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
                time: None,
                image: None,
            },
            reporter,
            match_score: None,
        }
    }

    #[test]
    fn test_first_claim_moves_item_to_verification_pending() {
        let engine = LifecycleEngine::in_memory();
        let item = engine
            .report_item(new_item(ItemType::Found, ParticipantId::new()))
            .unwrap();

        engine
            .submit_claim(
                item.id(),
                ClaimantInfo::new(ParticipantId::new(), "x@y.com"),
                "mine",
            )
            .unwrap();

        assert_eq!(
            engine.get_item(item.id()).unwrap().status(),
            ItemStatus::VerificationPending
        );
    }

    #[test]
    fn test_lost_items_refuse_claims() {
        let engine = LifecycleEngine::in_memory();
        let item = engine
            .report_item(new_item(ItemType::Lost, ParticipantId::new()))
            .unwrap();

        let err = engine
            .submit_claim(
                item.id(),
                ClaimantInfo::new(ParticipantId::new(), "x@y.com"),
                "mine",
            )
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(engine.get_item(item.id()).unwrap().status(), ItemStatus::Active);
    }

    #[test]
    fn test_validation_comes_before_lookup() {
        let engine = LifecycleEngine::in_memory();
        let err = engine
            .submit_claim(
                ItemId::new(),
                ClaimantInfo::new(ParticipantId::new(), "x@y.com"),
                "  ",
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_health_checks_cover_every_store() {
        let engine = LifecycleEngine::in_memory();
        assert_eq!(engine.health_checks().len(), 3);
    }
}
