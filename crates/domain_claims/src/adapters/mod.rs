//! Adapters for the claim ledger port
//!
//! - **InMemoryClaimLedger**: process-local store with per-item and
//!   per-claim ordering indexes

pub mod memory;

pub use memory::InMemoryClaimLedger;
