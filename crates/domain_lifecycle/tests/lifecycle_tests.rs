//! Tests for domain_lifecycle

use std::sync::Arc;
use std::thread;

use core_kernel::{ClaimRequestId, ErrorKind, ItemId, ParticipantId, QuestionId};
use domain_claims::{ClaimStatus, PartyRole};
use domain_item::{ItemQuery, ItemStatus, ItemType};
use domain_lifecycle::{
    ClaimDialog, ClaimForm, ConfirmRecoveryDialog, ContactExchangeDialog, FeedbackLevel,
    LifecycleEngine, NotificationKind, RecordingFeedback, VerificationDialog,
};
use test_utils::{
    assert_claim_statuses, assert_error_kind, assert_item_status, assert_notification_count,
    assert_notified, assert_redacted, assert_revealed, ClaimantBuilder, ContactFixtures,
    IdFixtures, ItemFixtures, NewItemBuilder, TestWorld,
};

// ============================================================================
// Scenario Tests
// ============================================================================

mod scenario_tests {
    use super::*;

    #[test]
    fn test_happy_path_to_recovery() {
        let world = TestWorld::new();
        let engine = &world.engine;
        let item = world.report_found();
        assert_item_status(engine, item.id(), ItemStatus::Active);

        let claimant = ClaimantBuilder::new()
            .with_email("x@y.com")
            .with_phone("+1234567890")
            .build();
        let claimant_id = claimant.claimant_id;
        let claim = engine
            .submit_claim(item.id(), claimant, "Lock screen is a photo of my dog")
            .unwrap();
        assert_item_status(engine, item.id(), ItemStatus::VerificationPending);
        assert_notified(&world.outbox, world.finder, NotificationKind::ClaimSubmitted);

        let exchange = engine.verify_claim(claim.id()).unwrap();
        assert_item_status(engine, item.id(), ItemStatus::VerificationPending);
        assert_eq!(exchange.owner.email, "x@y.com");
        assert_eq!(exchange.owner.phone.as_deref(), Some("+1234567890"));
        assert_eq!(exchange.finder, Some(ContactFixtures::finder_contact()));
        assert_notified(&world.outbox, claimant_id, NotificationKind::ClaimVerified);

        let stored = engine.get_item(item.id()).unwrap();
        assert_eq!(stored.owner_id, Some(claimant_id));
        assert_eq!(stored.contact_email.as_deref(), Some("x@y.com"));
        assert_eq!(stored.contact_phone.as_deref(), Some("+1234567890"));

        engine.confirm_handover(item.id()).unwrap();
        assert_item_status(engine, item.id(), ItemStatus::ItemOnItsWay);
        assert_notified(&world.outbox, claimant_id, NotificationKind::ItemOnItsWay);

        engine.confirm_recovery(item.id()).unwrap();
        assert_item_status(engine, item.id(), ItemStatus::Recovered);
        assert_notified(&world.outbox, world.finder, NotificationKind::ItemRecovered);
        assert_eq!(engine.helper_badges(world.finder).unwrap(), 1);
    }

    #[test]
    fn test_two_claims_rejected_in_turn() {
        let world = TestWorld::new();
        let engine = &world.engine;
        let item = world.report_found();

        let c1 = world.claim(&item, "one@example.com");
        let c2 = world.claim(&item, "two@example.com");
        assert_item_status(engine, item.id(), ItemStatus::VerificationPending);

        let outcome = engine.reject_claim(c1.id()).unwrap();
        assert_eq!(outcome.item_status, ItemStatus::VerificationPending);
        assert_item_status(engine, item.id(), ItemStatus::VerificationPending);
        assert_eq!(engine.get_claim(c2.id()).unwrap().status(), ClaimStatus::Pending);

        let outcome = engine.reject_claim(c2.id()).unwrap();
        assert_eq!(outcome.item_status, ItemStatus::Active);
        assert_item_status(engine, item.id(), ItemStatus::Active);
        assert_claim_statuses(
            engine,
            item.id(),
            &[ClaimStatus::Rejected, ClaimStatus::Rejected],
        );
    }

    #[test]
    fn test_item_reopens_for_claims_after_rejection() {
        let world = TestWorld::new();
        let item = world.report_found();
        let first = world.claim(&item, "one@example.com");
        world.engine.reject_claim(first.id()).unwrap();

        world.claim(&item, "two@example.com");

        assert_item_status(&world.engine, item.id(), ItemStatus::VerificationPending);
    }

    #[test]
    fn test_verified_claim_keeps_item_pending_after_sibling_rejection() {
        let world = TestWorld::new();
        let engine = &world.engine;
        let item = world.report_found();
        let c1 = world.claim(&item, "one@example.com");
        let c2 = world.claim(&item, "two@example.com");

        engine.verify_claim(c1.id()).unwrap();
        let outcome = engine.reject_claim(c2.id()).unwrap();

        assert_eq!(outcome.item_status, ItemStatus::VerificationPending);
        engine.confirm_handover(item.id()).unwrap();
    }
}

// ============================================================================
// Submit Tests
// ============================================================================

mod submit_tests {
    use super::*;

    #[test]
    fn test_blank_email_is_rejected() {
        let world = TestWorld::new();
        let item = world.report_found();

        let claimant = ClaimantBuilder::new().with_email("   ").build();
        assert_error_kind(
            world.engine.submit_claim(item.id(), claimant, "mine"),
            ErrorKind::Validation,
        );
        assert_item_status(&world.engine, item.id(), ItemStatus::Active);
        assert!(world.engine.get_claims(item.id()).unwrap().is_empty());
    }

    #[test]
    fn test_blank_message_is_rejected() {
        let world = TestWorld::new();
        let item = world.report_found();

        assert_error_kind(
            world
                .engine
                .submit_claim(item.id(), ClaimantBuilder::new().build(), "\t "),
            ErrorKind::Validation,
        );
    }

    #[test]
    fn test_unknown_item() {
        let world = TestWorld::new();
        assert_error_kind(
            world
                .engine
                .submit_claim(ItemId::new(), ClaimantBuilder::new().build(), "mine"),
            ErrorKind::NotFound,
        );
    }

    #[test]
    fn test_lost_item_refuses_claims() {
        let world = TestWorld::new();
        let item = world
            .engine
            .report_item(ItemFixtures::lost_phone(IdFixtures::owner_id()))
            .unwrap();

        assert_error_kind(
            world
                .engine
                .submit_claim(item.id(), ClaimantBuilder::new().build(), "mine"),
            ErrorKind::InvalidState,
        );
        assert_item_status(&world.engine, item.id(), ItemStatus::Active);
    }

    #[test]
    fn test_claims_refused_once_one_is_verified() {
        let world = TestWorld::new();
        let item = world.report_found();
        let claim = world.claim(&item, "one@example.com");
        world.engine.verify_claim(claim.id()).unwrap();

        assert_error_kind(
            world
                .engine
                .submit_claim(item.id(), ClaimantBuilder::new().build(), "no, mine"),
            ErrorKind::InvalidState,
        );
    }

    #[test]
    fn test_claims_refused_on_terminal_items() {
        let world = TestWorld::new();
        let item = world.report_found();
        world.engine.close_item(item.id(), None).unwrap();

        assert_error_kind(
            world
                .engine
                .submit_claim(item.id(), ClaimantBuilder::new().build(), "mine"),
            ErrorKind::InvalidState,
        );
    }

    #[test]
    fn test_duplicate_pending_claim_refused() {
        let world = TestWorld::new();
        let item = world.report_found();
        let claimant = ClaimantBuilder::new().build();

        world
            .engine
            .submit_claim(item.id(), claimant.clone(), "mine")
            .unwrap();
        assert_error_kind(
            world.engine.submit_claim(item.id(), claimant, "still mine"),
            ErrorKind::InvalidState,
        );
        assert_eq!(world.engine.get_claims(item.id()).unwrap().len(), 1);
    }

    #[test]
    fn test_finder_cannot_claim() {
        let world = TestWorld::new();
        let item = world.report_found();
        let finder = ClaimantBuilder::new().with_id(world.finder).build();

        assert_error_kind(
            world.engine.submit_claim(item.id(), finder, "mine"),
            ErrorKind::InvalidState,
        );
    }
}

// ============================================================================
// Decision Tests
// ============================================================================

mod decision_tests {
    use super::*;

    #[test]
    fn test_verify_unknown_claim() {
        let engine = LifecycleEngine::in_memory();
        assert_error_kind(engine.verify_claim(ClaimRequestId::new()), ErrorKind::NotFound);
        assert_error_kind(engine.reject_claim(ClaimRequestId::new()), ErrorKind::NotFound);
    }

    #[test]
    fn test_verify_twice_fails() {
        let world = TestWorld::new();
        let item = world.report_found();
        let claim = world.claim(&item, "x@y.com");

        world.engine.verify_claim(claim.id()).unwrap();
        assert_error_kind(world.engine.verify_claim(claim.id()), ErrorKind::InvalidState);
        assert_notification_count(
            &world.outbox,
            claim.claimant_id,
            NotificationKind::ClaimVerified,
            1,
        );
    }

    #[test]
    fn test_rejected_claim_cannot_be_verified() {
        let world = TestWorld::new();
        let item = world.report_found();
        let claim = world.claim(&item, "x@y.com");

        world.engine.reject_claim(claim.id()).unwrap();

        assert_error_kind(world.engine.verify_claim(claim.id()), ErrorKind::InvalidState);
        assert_error_kind(world.engine.reject_claim(claim.id()), ErrorKind::InvalidState);
        assert_notified(&world.outbox, claim.claimant_id, NotificationKind::ClaimRejected);
    }

    #[test]
    fn test_second_verification_on_item_fails() {
        let world = TestWorld::new();
        let item = world.report_found();
        let c1 = world.claim(&item, "one@example.com");
        let c2 = world.claim(&item, "two@example.com");

        world.engine.verify_claim(c1.id()).unwrap();

        assert_error_kind(world.engine.verify_claim(c2.id()), ErrorKind::InvalidState);
        assert_claim_statuses(
            &world.engine,
            item.id(),
            &[ClaimStatus::Verified, ClaimStatus::Pending],
        );
        let stored = world.engine.get_item(item.id()).unwrap();
        assert_eq!(stored.owner_id, Some(c1.claimant_id));
    }

    #[test]
    fn test_verify_on_closed_item_fails() {
        let world = TestWorld::new();
        let item = world.report_found();
        let claim = world.claim(&item, "x@y.com");
        world.engine.close_item(item.id(), None).unwrap();

        assert_error_kind(world.engine.verify_claim(claim.id()), ErrorKind::InvalidState);
        assert_eq!(
            world.engine.get_claim(claim.id()).unwrap().status(),
            ClaimStatus::Pending
        );
    }

    #[test]
    fn test_rejection_never_closes() {
        let world = TestWorld::new();
        let item = world.report_found();
        let claim = world.claim(&item, "x@y.com");

        world.engine.reject_claim(claim.id()).unwrap();

        assert_item_status(&world.engine, item.id(), ItemStatus::Active);
    }

    #[test]
    fn test_finder_contact_is_optional() {
        let engine = LifecycleEngine::in_memory();
        let item = engine
            .report_item(ItemFixtures::found_phone(ParticipantId::new()))
            .unwrap();
        let claim = engine
            .submit_claim(item.id(), ClaimantBuilder::new().build(), "mine")
            .unwrap();

        let exchange = engine.verify_claim(claim.id()).unwrap();

        assert!(exchange.finder.is_none());
        assert!(exchange.counterpart_for(PartyRole::Owner).is_none());
        assert!(exchange.counterpart_for(PartyRole::Finder).is_some());
    }
}

// ============================================================================
// Question Tests
// ============================================================================

mod question_tests {
    use super::*;

    #[test]
    fn test_ask_and_answer() {
        let world = TestWorld::new();
        let item = world.report_found();
        let claim = world.claim(&item, "x@y.com");

        let question = world
            .engine
            .ask_question(claim.id(), "What is the wallpaper?")
            .unwrap();
        assert_item_status(&world.engine, item.id(), ItemStatus::VerificationPending);
        assert_notified(&world.outbox, claim.claimant_id, NotificationKind::QuestionAsked);

        let answered = world.engine.answer_question(question.id, "A dog").unwrap();
        assert_eq!(answered.answer.as_deref(), Some("A dog"));
        assert_notified(&world.outbox, world.finder, NotificationKind::QuestionAnswered);

        let stored = world.engine.get_claim(claim.id()).unwrap();
        assert_eq!(stored.status(), ClaimStatus::Pending);
        assert_eq!(stored.verification_answers, vec!["A dog".to_string()]);
        assert_eq!(world.engine.questions_for(claim.id()).unwrap().len(), 1);
    }

    #[test]
    fn test_blank_question() {
        let world = TestWorld::new();
        let item = world.report_found();
        let claim = world.claim(&item, "x@y.com");

        assert_error_kind(world.engine.ask_question(claim.id(), "  "), ErrorKind::Validation);
        assert!(world.engine.questions_for(claim.id()).unwrap().is_empty());
    }

    #[test]
    fn test_question_on_decided_claim() {
        let world = TestWorld::new();
        let item = world.report_found();
        let claim = world.claim(&item, "x@y.com");
        world.engine.reject_claim(claim.id()).unwrap();

        assert_error_kind(
            world.engine.ask_question(claim.id(), "Which color?"),
            ErrorKind::InvalidState,
        );
    }

    #[test]
    fn test_answer_twice() {
        let world = TestWorld::new();
        let item = world.report_found();
        let claim = world.claim(&item, "x@y.com");
        let question = world.engine.ask_question(claim.id(), "Which color?").unwrap();

        world.engine.answer_question(question.id, "Black").unwrap();

        assert_error_kind(
            world.engine.answer_question(question.id, "White"),
            ErrorKind::InvalidState,
        );
        assert_eq!(
            world.engine.get_claim(claim.id()).unwrap().verification_answers,
            vec!["Black".to_string()]
        );
    }

    #[test]
    fn test_no_questions_once_item_is_closed() {
        let world = TestWorld::new();
        let item = world.report_found();
        let claim = world.claim(&item, "x@y.com");
        world.engine.close_item(item.id(), None).unwrap();

        assert_error_kind(
            world.engine.ask_question(claim.id(), "Which color?"),
            ErrorKind::InvalidState,
        );
        assert_notification_count(
            &world.outbox,
            claim.claimant_id,
            NotificationKind::QuestionAsked,
            0,
        );
        assert!(world.engine.questions_for(claim.id()).unwrap().is_empty());
    }

    #[test]
    fn test_no_answers_once_item_is_on_its_way() {
        let world = TestWorld::new();
        let item = world.report_found();
        let owner = world.claim(&item, "owner@y.com");
        let other = world.claim(&item, "other@y.com");
        let question = world.engine.ask_question(other.id(), "Which color?").unwrap();

        world.engine.verify_claim(owner.id()).unwrap();
        world.engine.confirm_handover(item.id()).unwrap();

        assert_error_kind(
            world.engine.answer_question(question.id, "Black"),
            ErrorKind::InvalidState,
        );
        assert!(world
            .engine
            .get_claim(other.id())
            .unwrap()
            .verification_answers
            .is_empty());
        assert_notification_count(
            &world.outbox,
            world.finder,
            NotificationKind::QuestionAnswered,
            0,
        );
    }

    #[test]
    fn test_answer_unknown_question() {
        let engine = LifecycleEngine::in_memory();
        assert_error_kind(
            engine.answer_question(QuestionId::new(), "Black"),
            ErrorKind::NotFound,
        );
        assert_error_kind(
            engine.answer_question(QuestionId::new(), ""),
            ErrorKind::Validation,
        );
    }
}

// ============================================================================
// Handover, Recovery and Close Tests
// ============================================================================

mod completion_tests {
    use super::*;

    #[test]
    fn test_handover_requires_verified_claim() {
        let world = TestWorld::new();
        let item = world.report_found();
        world.claim(&item, "x@y.com");

        assert_error_kind(world.engine.confirm_handover(item.id()), ErrorKind::InvalidState);
        assert_item_status(&world.engine, item.id(), ItemStatus::VerificationPending);
    }

    #[test]
    fn test_handover_on_active_item() {
        let world = TestWorld::new();
        let item = world.report_found();
        assert_error_kind(world.engine.confirm_handover(item.id()), ErrorKind::InvalidState);
    }

    #[test]
    fn test_retrying_transitions_fails() {
        let world = TestWorld::new();
        let item = world.report_found();
        let claim = world.claim(&item, "x@y.com");
        world.engine.verify_claim(claim.id()).unwrap();
        world.engine.confirm_handover(item.id()).unwrap();

        assert_error_kind(world.engine.confirm_handover(item.id()), ErrorKind::InvalidState);

        world.engine.confirm_recovery(item.id()).unwrap();
        assert_error_kind(world.engine.confirm_recovery(item.id()), ErrorKind::InvalidState);
        assert_eq!(world.engine.helper_badges(world.finder).unwrap(), 1);
    }

    #[test]
    fn test_recovery_requires_handover() {
        let world = TestWorld::new();
        let item = world.report_found();
        let claim = world.claim(&item, "x@y.com");
        world.engine.verify_claim(claim.id()).unwrap();

        assert_error_kind(world.engine.confirm_recovery(item.id()), ErrorKind::InvalidState);
        assert_eq!(world.engine.helper_badges(world.finder).unwrap(), 0);
    }

    #[test]
    fn test_close_leaves_pending_claims() {
        let world = TestWorld::new();
        let item = world.report_found();
        let claim = world.claim(&item, "x@y.com");

        let closed = world
            .engine
            .close_item(item.id(), Some("Handed to the police".to_string()))
            .unwrap();

        assert_eq!(closed.status(), ItemStatus::Closed);
        assert_claim_statuses(&world.engine, item.id(), &[ClaimStatus::Pending]);
        assert_notified(&world.outbox, claim.claimant_id, NotificationKind::ItemClosed);
        assert_notified(&world.outbox, world.finder, NotificationKind::ItemClosed);
    }

    #[test]
    fn test_close_terminal_item_fails() {
        let world = TestWorld::new();
        let item = world.report_found();
        world.engine.close_item(item.id(), None).unwrap();

        assert_error_kind(world.engine.close_item(item.id(), None), ErrorKind::InvalidState);
    }

    #[test]
    fn test_close_from_on_its_way() {
        let world = TestWorld::new();
        let item = world.report_found();
        let claim = world.claim(&item, "x@y.com");
        world.engine.verify_claim(claim.id()).unwrap();
        world.engine.confirm_handover(item.id()).unwrap();

        world.engine.close_item(item.id(), None).unwrap();

        assert_item_status(&world.engine, item.id(), ItemStatus::Closed);
    }
}

// ============================================================================
// Read Surface Tests
// ============================================================================

mod read_tests {
    use super::*;

    #[test]
    fn test_anonymous_item_revealed_after_verification() {
        let world = TestWorld::new();
        let item = world.report_anonymous();
        assert_redacted(&world.engine.get_public_item(item.id()).unwrap());

        let claim = world.claim(&item, "x@y.com");
        assert_redacted(&world.engine.get_public_item(item.id()).unwrap());

        world.engine.verify_claim(claim.id()).unwrap();
        let view = world.engine.get_public_item(item.id()).unwrap();
        assert_revealed(&view);
        assert_eq!(view.color.as_deref(), Some("Brown"));
    }

    #[test]
    fn test_found_items_are_never_redacted() {
        let world = TestWorld::new();
        let item = world.report_found();
        assert_revealed(&world.engine.get_public_item(item.id()).unwrap());
    }

    #[test]
    fn test_contact_exchange_needs_verified_claim() {
        let world = TestWorld::new();
        let item = world.report_found();
        world.claim(&item, "x@y.com");

        assert_error_kind(world.engine.contact_exchange(item.id()), ErrorKind::InvalidState);
    }

    #[test]
    fn test_contact_exchange_after_verification() {
        let world = TestWorld::new();
        let item = world.report_found();
        let claim = world.claim(&item, "x@y.com");
        world.engine.verify_claim(claim.id()).unwrap();

        let exchange = world.engine.contact_exchange(item.id()).unwrap();
        assert_eq!(exchange.claim_id, claim.id());
        assert_eq!(
            exchange.counterpart_for(PartyRole::Owner).map(|c| c.email.as_str()),
            Some("finder@example.com")
        );
    }

    #[test]
    fn test_find_items_by_status_and_text() {
        let world = TestWorld::new();
        let phone = world.report_found();
        world
            .engine
            .report_item(
                NewItemBuilder::new()
                    .with_category("Umbrella")
                    .with_description("Blue umbrella")
                    .build(),
            )
            .unwrap();
        world.claim(&phone, "x@y.com");

        let pending = world
            .engine
            .find_items(&ItemQuery::by_status(ItemStatus::VerificationPending))
            .unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id(), phone.id());

        let umbrellas = world
            .engine
            .find_items(&ItemQuery::default().search("umbrella"))
            .unwrap();
        assert_eq!(umbrellas.len(), 1);
    }

    #[test]
    fn test_public_listing_redacts_per_item() {
        let world = TestWorld::new();
        world.report_found();
        world.report_anonymous();

        let listing = world.engine.public_listing(&ItemQuery::default()).unwrap();

        assert_eq!(listing.len(), 2);
        for view in listing {
            assert_eq!(view.redacted, view.item_type == ItemType::Anonymous);
        }
    }

    #[test]
    fn test_public_search_skips_hidden_details() {
        let world = TestWorld::new();
        let wallet = world.report_anonymous();
        world.report_found();

        let by_hidden = world
            .engine
            .public_listing(&ItemQuery::default().search("library card"))
            .unwrap();
        assert!(by_hidden.is_empty());

        let by_location = world
            .engine
            .public_listing(&ItemQuery::default().search("north gate"))
            .unwrap();
        assert_eq!(by_location.len(), 1);
        assert_eq!(by_location[0].id, wallet.id());

        let claim = world.claim(&wallet, "x@y.com");
        world.engine.verify_claim(claim.id()).unwrap();
        let revealed = world
            .engine
            .public_listing(&ItemQuery::default().search("library card"))
            .unwrap();
        assert_eq!(revealed.len(), 1);
        assert_revealed(&revealed[0]);
    }

    #[test]
    fn test_public_search_paginates_after_matching() {
        let world = TestWorld::new();
        for _ in 0..3 {
            world.report_anonymous();
        }
        for _ in 0..2 {
            world
                .engine
                .report_item(NewItemBuilder::new().with_description("wallet on a bench").build())
                .unwrap();
        }

        let page = world
            .engine
            .public_listing(&ItemQuery::default().search("wallet").paginate(10, 1))
            .unwrap();
        // three anonymous wallets by category, two by description
        assert_eq!(page.len(), 4);
    }

    #[test]
    fn test_claims_on_unknown_item() {
        let engine = LifecycleEngine::in_memory();
        assert_error_kind(engine.get_claims(ItemId::new()), ErrorKind::NotFound);
        assert_error_kind(engine.questions_for(ClaimRequestId::new()), ErrorKind::NotFound);
    }
}

// ============================================================================
// Dialog Tests
// ============================================================================

mod dialog_tests {
    use super::*;

    #[test]
    fn test_dialog_walkthrough() {
        let world = TestWorld::new();
        let engine = &world.engine;
        let sink = RecordingFeedback::new();
        let item = world.report_found();
        let claimant_id = ParticipantId::new();

        let claim = ClaimDialog::new(engine, &sink, item.id(), claimant_id)
            .submit(ClaimForm {
                email: "x@y.com".to_string(),
                phone: Some("+1234567890".to_string()),
                message: "Mine".to_string(),
            })
            .unwrap();
        assert_eq!(sink.last().unwrap().title, "Claim submitted!");

        let mut verification = VerificationDialog::new(engine, &sink, item.id());
        assert_eq!(verification.claims().unwrap().len(), 1);
        verification.select(claim.id());
        verification.ask_question("What is the wallpaper?").unwrap();
        assert_eq!(sink.last().unwrap().title, "Question sent to claimant");

        verification.verify(claim.id()).unwrap();
        let shown = sink.last().unwrap();
        assert_eq!(shown.title, "Ownership verified!");
        assert_eq!(
            shown.description.as_deref(),
            Some("Contact information will be exchanged")
        );

        let contact = ContactExchangeDialog::new(engine, &sink, item.id());
        let owner = contact.counterpart(PartyRole::Finder).unwrap().unwrap();
        assert_eq!(owner.email, "x@y.com");
        contact.copied("Email");
        assert_eq!(sink.last().unwrap().title, "Email copied to clipboard");
        contact.confirm_handover().unwrap();
        assert_eq!(sink.last().unwrap().title, "Item marked as on its way!");

        ConfirmRecoveryDialog::new(engine, &sink, item.id())
            .confirm()
            .unwrap();
        assert_eq!(sink.last().unwrap().title, "Item marked as recovered!");
        assert_item_status(engine, item.id(), ItemStatus::Recovered);

        assert!(sink
            .entries()
            .iter()
            .all(|f| f.level == FeedbackLevel::Success));
    }

    #[test]
    fn test_reject_shows_info() {
        let world = TestWorld::new();
        let sink = RecordingFeedback::new();
        let item = world.report_found();
        let claim = world.claim(&item, "x@y.com");

        VerificationDialog::new(&world.engine, &sink, item.id())
            .reject(claim.id())
            .unwrap();

        let shown = sink.last().unwrap();
        assert_eq!(shown.level, FeedbackLevel::Info);
        assert_eq!(shown.title, "Claim rejected");
    }
}

// ============================================================================
// Concurrency Tests
// ============================================================================

mod concurrency_tests {
    use super::*;

    #[test]
    fn test_concurrent_verifications_leave_one_winner() {
        let world = TestWorld::new();
        let item = world.report_found();
        let claims: Vec<_> = (0..8)
            .map(|i| world.claim(&item, &format!("c{}@example.com", i)))
            .collect();

        let handles: Vec<_> = claims
            .iter()
            .map(|claim| {
                let engine = Arc::clone(&world.engine);
                let claim_id = claim.id();
                thread::spawn(move || engine.verify_claim(claim_id).is_ok())
            })
            .collect();
        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();

        assert_eq!(winners, 1);
        let verified = world
            .engine
            .get_claims(item.id())
            .unwrap()
            .iter()
            .filter(|c| c.status() == ClaimStatus::Verified)
            .count();
        assert_eq!(verified, 1);
    }

    #[test]
    fn test_concurrent_submissions_and_rejections() {
        let world = TestWorld::new();
        let item = world.report_found();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let engine = Arc::clone(&world.engine);
                let item_id = item.id();
                thread::spawn(move || {
                    let claimant = ClaimantBuilder::new()
                        .with_email(format!("c{}@example.com", i))
                        .build();
                    let claim = engine.submit_claim(item_id, claimant, "mine").unwrap();
                    engine.reject_claim(claim.id()).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_item_status(&world.engine, item.id(), ItemStatus::Active);
        assert_eq!(world.engine.get_claims(item.id()).unwrap().len(), 8);
    }
}
