//! Lifecycle Engine
//!
//! This crate enforces the item status state machine and the claim
//! verification workflow on top of the item registry and claim ledger.
//!
//! # Workflow
//!
//! ```text
//! submit_claim -> verify_claim -> confirm_handover -> confirm_recovery
//!      |              |
//!      |         reject_claim (item reverts to Active when nothing is left open)
//!      |
//!  ask_question / answer_question (no status change)
//! ```
//!
//! Every mutation on an item runs inside that item's lock; notifications go
//! out after the change is stored.

pub mod engine;
pub mod locks;
pub mod events;
pub mod notifications;
pub mod directory;
pub mod badges;
pub mod dialogs;
pub mod error;

pub use engine::{LifecycleEngine, LifecycleEngineBuilder, RejectOutcome};
pub use events::LifecycleEvent;
pub use notifications::{
    InMemoryOutbox, LoggingDispatcher, Notification, NotificationDispatcher, NotificationKind,
};
pub use directory::{ContactDirectory, InMemoryContactDirectory};
pub use badges::HelperBadgeTally;
pub use dialogs::{
    ClaimDialog, ClaimForm, ConfirmRecoveryDialog, ContactExchangeDialog, Feedback,
    FeedbackLevel, FeedbackSink, RecordingFeedback, VerificationDialog,
};
pub use error::LifecycleError;
