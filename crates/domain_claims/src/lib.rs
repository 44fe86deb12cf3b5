//! Claim Ledger Domain
//!
//! This crate models ownership claims against found items, the questions a
//! finder asks to verify them, and the contact details exchanged once a
//! claim is verified.
//!
//! # Claim Lifecycle
//!
//! ```text
//! pending -> verified
//!         -> rejected
//! ```
//!
//! Both verified and rejected are terminal.

pub mod claim;
pub mod contact;
pub mod question;
pub mod ports;
pub mod adapters;
pub mod error;

pub use claim::{ClaimRequest, ClaimStatus, ClaimantInfo, ClaimsOnItem};
pub use contact::{ContactExchange, ContactInfo, PartyRole, PreferredContactMethod};
pub use question::VerificationQuestion;
pub use ports::ClaimLedger;
pub use adapters::InMemoryClaimLedger;
pub use error::ClaimError;
