//! Dialog controllers
//!
//! Thin adapters between form input and the engine. Each controller checks
//! the form the way the dialog does, calls one engine operation and reports
//! the outcome through a [`FeedbackSink`]. Controllers hold no state beyond
//! the current form selection.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use core_kernel::{ClaimRequestId, ItemId, ParticipantId};
use domain_claims::{
    ClaimRequest, ClaimantInfo, ContactExchange, ContactInfo, PartyRole, VerificationQuestion,
};
use domain_item::Item;

use crate::engine::{LifecycleEngine, RejectOutcome};
use crate::error::LifecycleError;

/// Severity of a feedback message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackLevel {
    Success,
    Info,
    Error,
}

/// One user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub level: FeedbackLevel,
    pub title: String,
    pub description: Option<String>,
}

impl Feedback {
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(FeedbackLevel::Success, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(FeedbackLevel::Info, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(FeedbackLevel::Error, title)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn new(level: FeedbackLevel, title: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            description: None,
        }
    }
}

/// Where feedback goes; a toast in the UI
pub trait FeedbackSink: Send + Sync {
    fn show(&self, feedback: Feedback);
}

/// Sink that keeps everything it was shown
#[derive(Debug, Default)]
pub struct RecordingFeedback {
    shown: Mutex<Vec<Feedback>>,
}

impl RecordingFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Feedback> {
        self.shown.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<Feedback> {
        self.shown.lock().ok().and_then(|s| s.last().cloned())
    }
}

impl FeedbackSink for RecordingFeedback {
    fn show(&self, feedback: Feedback) {
        if let Ok(mut shown) = self.shown.lock() {
            shown.push(feedback);
        }
    }
}

/// Reports engine failures to the sink and passes them on
fn report<T>(sink: &dyn FeedbackSink, result: Result<T, LifecycleError>) -> Result<T, LifecycleError> {
    if let Err(ref err) = result {
        sink.show(Feedback::error(err.to_string()));
    }
    result
}

// ============================================================================
// Claim dialog
// ============================================================================

/// Form a claimant fills in
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClaimForm {
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// Claimant-side dialog for claiming a found item
pub struct ClaimDialog<'a> {
    engine: &'a LifecycleEngine,
    feedback: &'a dyn FeedbackSink,
    item_id: ItemId,
    claimant_id: ParticipantId,
}

impl<'a> ClaimDialog<'a> {
    pub fn new(
        engine: &'a LifecycleEngine,
        feedback: &'a dyn FeedbackSink,
        item_id: ItemId,
        claimant_id: ParticipantId,
    ) -> Self {
        Self {
            engine,
            feedback,
            item_id,
            claimant_id,
        }
    }

    pub fn submit(&self, form: ClaimForm) -> Result<ClaimRequest, LifecycleError> {
        if form.email.trim().is_empty() || form.message.trim().is_empty() {
            self.feedback
                .show(Feedback::error("Please provide email and a message"));
            return Err(LifecycleError::validation("email and message are required"));
        }

        let mut claimant = ClaimantInfo::new(self.claimant_id, form.email);
        if let Some(phone) = form.phone {
            claimant = claimant.with_phone(phone);
        }

        let claim = report(
            self.feedback,
            self.engine.submit_claim(self.item_id, claimant, form.message),
        )?;
        self.feedback.show(
            Feedback::success("Claim submitted!")
                .with_description("The finder will review your claim and contact you"),
        );
        Ok(claim)
    }
}

// ============================================================================
// Verification dialog
// ============================================================================

/// Finder-side dialog for reviewing the claims on one item
pub struct VerificationDialog<'a> {
    engine: &'a LifecycleEngine,
    feedback: &'a dyn FeedbackSink,
    item_id: ItemId,
    selected: Option<ClaimRequestId>,
}

impl<'a> VerificationDialog<'a> {
    pub fn new(engine: &'a LifecycleEngine, feedback: &'a dyn FeedbackSink, item_id: ItemId) -> Self {
        Self {
            engine,
            feedback,
            item_id,
            selected: None,
        }
    }

    /// Claims under review, in submission order
    pub fn claims(&self) -> Result<Vec<ClaimRequest>, LifecycleError> {
        self.engine.get_claims(self.item_id)
    }

    /// Picks the claim the next question goes to
    pub fn select(&mut self, claim_id: ClaimRequestId) {
        self.selected = Some(claim_id);
    }

    pub fn selected(&self) -> Option<ClaimRequestId> {
        self.selected
    }

    /// Sends a question to the selected claimant
    pub fn ask_question(&self, question: &str) -> Result<VerificationQuestion, LifecycleError> {
        let claim_id = match self.selected {
            Some(claim_id) if !question.trim().is_empty() => claim_id,
            _ => {
                self.feedback
                    .show(Feedback::error("Please enter a verification question"));
                return Err(LifecycleError::validation("verification question is required"));
            }
        };

        let asked = report(self.feedback, self.engine.ask_question(claim_id, question))?;
        self.feedback.show(Feedback::success("Question sent to claimant"));
        Ok(asked)
    }

    pub fn verify(&self, claim_id: ClaimRequestId) -> Result<ContactExchange, LifecycleError> {
        let exchange = report(self.feedback, self.engine.verify_claim(claim_id))?;
        self.feedback.show(
            Feedback::success("Ownership verified!")
                .with_description("Contact information will be exchanged"),
        );
        Ok(exchange)
    }

    pub fn reject(&self, claim_id: ClaimRequestId) -> Result<RejectOutcome, LifecycleError> {
        let outcome = report(self.feedback, self.engine.reject_claim(claim_id))?;
        self.feedback.show(Feedback::info("Claim rejected"));
        Ok(outcome)
    }
}

// ============================================================================
// Contact exchange dialog
// ============================================================================

/// Shows the other party's details once a claim is verified
pub struct ContactExchangeDialog<'a> {
    engine: &'a LifecycleEngine,
    feedback: &'a dyn FeedbackSink,
    item_id: ItemId,
}

impl<'a> ContactExchangeDialog<'a> {
    pub fn new(engine: &'a LifecycleEngine, feedback: &'a dyn FeedbackSink, item_id: ItemId) -> Self {
        Self {
            engine,
            feedback,
            item_id,
        }
    }

    /// The counterpart's contact details as seen by `viewer`
    pub fn counterpart(&self, viewer: PartyRole) -> Result<Option<ContactInfo>, LifecycleError> {
        let exchange = report(self.feedback, self.engine.contact_exchange(self.item_id))?;
        Ok(exchange.counterpart_for(viewer).cloned())
    }

    /// Acknowledges a copied contact field
    pub fn copied(&self, label: &str) {
        self.feedback
            .show(Feedback::success(format!("{} copied to clipboard", label)));
    }

    pub fn confirm_handover(&self) -> Result<Item, LifecycleError> {
        let item = report(self.feedback, self.engine.confirm_handover(self.item_id))?;
        self.feedback.show(
            Feedback::success("Item marked as on its way!")
                .with_description("The owner will confirm once they receive it"),
        );
        Ok(item)
    }
}

// ============================================================================
// Recovery dialog
// ============================================================================

/// Owner-side confirmation that the item arrived
pub struct ConfirmRecoveryDialog<'a> {
    engine: &'a LifecycleEngine,
    feedback: &'a dyn FeedbackSink,
    item_id: ItemId,
}

impl<'a> ConfirmRecoveryDialog<'a> {
    pub fn new(engine: &'a LifecycleEngine, feedback: &'a dyn FeedbackSink, item_id: ItemId) -> Self {
        Self {
            engine,
            feedback,
            item_id,
        }
    }

    pub fn confirm(&self) -> Result<Item, LifecycleError> {
        let item = report(self.feedback, self.engine.confirm_recovery(self.item_id))?;
        self.feedback.show(
            Feedback::success("Item marked as recovered!")
                .with_description("This case is now closed. Thank you for using FindBack!"),
        );
        Ok(item)
    }
}
