//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data and random
//! sequences of lifecycle operations.

use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{ItemId, ParticipantId};
use domain_item::{ItemStatus, ItemType};

/// Strategy for generating any item type
pub fn item_type_strategy() -> impl Strategy<Value = ItemType> {
    prop_oneof![
        Just(ItemType::Lost),
        Just(ItemType::Found),
        Just(ItemType::Anonymous),
    ]
}

/// Strategy for item types that accept claims
pub fn claimable_type_strategy() -> impl Strategy<Value = ItemType> {
    prop_oneof![Just(ItemType::Found), Just(ItemType::Anonymous)]
}

/// Strategy for generating any item status
pub fn item_status_strategy() -> impl Strategy<Value = ItemStatus> {
    prop_oneof![
        Just(ItemStatus::Active),
        Just(ItemStatus::VerificationPending),
        Just(ItemStatus::ItemOnItsWay),
        Just(ItemStatus::Recovered),
        Just(ItemStatus::Closed),
    ]
}

/// Strategy for generating ItemId
pub fn item_id_strategy() -> impl Strategy<Value = ItemId> {
    any::<[u8; 16]>().prop_map(|bytes| ItemId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}

/// Strategy for generating ParticipantId
pub fn participant_id_strategy() -> impl Strategy<Value = ParticipantId> {
    any::<[u8; 16]>().prop_map(|bytes| ParticipantId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}

/// Strategy for generating item categories
pub fn category_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Phone".to_string()),
        Just("Wallet".to_string()),
        Just("Keys".to_string()),
        Just("Bag".to_string()),
        Just("Jewelry".to_string()),
        Just("Documents".to_string()),
        Just("Electronics".to_string()),
    ]
}

/// Strategy for generating valid email addresses
pub fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{5,10}", "[a-z]{3,8}")
        .prop_map(|(local, domain)| format!("{}@{}.com", local, domain))
}

/// Strategy for generating valid phone numbers
pub fn phone_strategy() -> impl Strategy<Value = String> {
    (100u32..999u32, 100u32..999u32, 1000u32..9999u32)
        .prop_map(|(area, prefix, line)| format!("+1-{}-{}-{}", area, prefix, line))
}

/// Strategy for non-blank free text
pub fn message_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ,.']{0,60}"
}

/// Strategy for strings that are empty after trimming
pub fn blank_strategy() -> impl Strategy<Value = String> {
    "[ \t\n]{0,5}"
}

/// Strategy for match percentages (0% to 100%)
pub fn match_percent_strategy() -> impl Strategy<Value = Decimal> {
    (0u32..=10000u32).prop_map(|n| Decimal::new(n as i64, 2))
}

/// One step in a randomly generated lifecycle run
///
/// Claim-targeted steps pick a claim by index, modulo the number of claims
/// submitted so far; claimant indices select from a small fixed pool so the
/// same claimant can try twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStep {
    Submit { claimant: usize },
    Verify { claim: usize },
    Reject { claim: usize },
    Ask { claim: usize },
    Handover,
    Recover,
    Close,
}

/// Size of the claimant pool used by [`LifecycleStep::Submit`]
pub const CLAIMANT_POOL: usize = 4;

/// Strategy for one lifecycle step, weighted towards claim activity
pub fn lifecycle_step_strategy() -> impl Strategy<Value = LifecycleStep> {
    prop_oneof![
        4 => (0..CLAIMANT_POOL).prop_map(|claimant| LifecycleStep::Submit { claimant }),
        3 => (0usize..8).prop_map(|claim| LifecycleStep::Verify { claim }),
        3 => (0usize..8).prop_map(|claim| LifecycleStep::Reject { claim }),
        1 => (0usize..8).prop_map(|claim| LifecycleStep::Ask { claim }),
        2 => Just(LifecycleStep::Handover),
        2 => Just(LifecycleStep::Recover),
        1 => Just(LifecycleStep::Close),
    ]
}

/// Strategy for a run of lifecycle steps
pub fn lifecycle_steps_strategy(max_len: usize) -> impl Strategy<Value = Vec<LifecycleStep>> {
    proptest::collection::vec(lifecycle_step_strategy(), 1..=max_len)
}
