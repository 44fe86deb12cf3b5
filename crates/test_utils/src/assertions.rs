//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use std::fmt::Debug;

use core_kernel::{ErrorKind, ItemId, ParticipantId};
use domain_claims::ClaimStatus;
use domain_item::{ItemStatus, PublicItemView};
use domain_lifecycle::{InMemoryOutbox, LifecycleEngine, LifecycleError, NotificationKind};

/// Asserts that a stored item has the expected status
pub fn assert_item_status(engine: &LifecycleEngine, item_id: ItemId, expected: ItemStatus) {
    let actual = engine.get_item(item_id).unwrap().status();
    assert_eq!(
        actual, expected,
        "Item {} status mismatch: actual={}, expected={}",
        item_id, actual, expected
    );
}

/// Asserts that every claim on an item has the expected statuses, in order
pub fn assert_claim_statuses(engine: &LifecycleEngine, item_id: ItemId, expected: &[ClaimStatus]) {
    let actual: Vec<ClaimStatus> = engine
        .get_claims(item_id)
        .unwrap()
        .iter()
        .map(|c| c.status())
        .collect();
    assert_eq!(actual, expected, "Claim statuses mismatch on item {}", item_id);
}

/// Asserts that an operation failed with the expected error kind
///
/// # Panics
///
/// Panics if the result is Ok or the kind differs
pub fn assert_error_kind<T: Debug>(result: Result<T, LifecycleError>, expected: ErrorKind) {
    match result {
        Ok(value) => panic!("Expected {} error, got Ok({:?})", expected, value),
        Err(err) => assert_eq!(
            err.kind(),
            expected,
            "Error kind mismatch: actual={} ({}), expected={}",
            err.kind(),
            err,
            expected
        ),
    }
}

/// Asserts that an anonymous item's identifying details are hidden
pub fn assert_redacted(view: &PublicItemView) {
    assert!(view.redacted, "Expected item {} to be redacted", view.id);
    assert!(view.description.is_none(), "Description leaked: {:?}", view.description);
    assert!(view.brand.is_none(), "Brand leaked: {:?}", view.brand);
    assert!(view.color.is_none(), "Color leaked: {:?}", view.color);
    assert!(view.image.is_none(), "Image leaked: {:?}", view.image);
    assert!(view.time.is_none(), "Time leaked: {:?}", view.time);
}

/// Asserts that an item's details are visible
pub fn assert_revealed(view: &PublicItemView) {
    assert!(!view.redacted, "Expected item {} to be revealed", view.id);
    assert!(view.description.is_some(), "Description missing on item {}", view.id);
}

/// Asserts that a participant received at least one notification of a kind
pub fn assert_notified(outbox: &InMemoryOutbox, recipient: ParticipantId, kind: NotificationKind) {
    let received = outbox.list_for(recipient).unwrap();
    assert!(
        received.iter().any(|n| n.kind == kind),
        "Expected {} to receive {:?}; got {:?}",
        recipient,
        kind,
        received.iter().map(|n| n.kind).collect::<Vec<_>>()
    );
}

/// Asserts how many notifications of a kind a participant received
pub fn assert_notification_count(
    outbox: &InMemoryOutbox,
    recipient: ParticipantId,
    kind: NotificationKind,
    expected: usize,
) {
    let actual = outbox
        .list_for(recipient)
        .unwrap()
        .iter()
        .filter(|n| n.kind == kind)
        .count();
    assert_eq!(
        actual, expected,
        "Notification count mismatch for {:?} to {}",
        kind, recipient
    );
}
