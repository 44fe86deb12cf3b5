//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for items, claimants and contacts, plus a
//! [`TestWorld`] that wires the lifecycle engine to an inspectable outbox and
//! contact directory.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;
use uuid::Uuid;

use core_kernel::ParticipantId;
use domain_claims::{ClaimRequest, ClaimantInfo, ContactInfo};
use domain_item::{Item, ItemDetails, ItemType, MatchScore, NewItem};
use domain_lifecycle::{InMemoryContactDirectory, InMemoryOutbox, LifecycleEngine};

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
});

/// Installs a test log subscriber once per process; honours `RUST_LOG`
pub fn init_test_tracing() {
    Lazy::force(&TRACING);
}

/// Fixture for date/time test data
pub struct DateFixtures;

impl DateFixtures {
    /// Standard date an item was lost or found (Mar 15, 2024)
    pub fn found_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    /// Standard time of day an item was found
    pub fn found_at() -> NaiveTime {
        NaiveTime::from_hms_opt(14, 30, 0).unwrap()
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Deterministic finder
    pub fn finder_id() -> ParticipantId {
        ParticipantId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap())
    }

    /// Deterministic owner of a lost item
    pub fn owner_id() -> ParticipantId {
        ParticipantId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").unwrap())
    }

    /// Deterministic claimant
    pub fn claimant_id() -> ParticipantId {
        ParticipantId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440003").unwrap())
    }
}

/// Fixture for item reports
pub struct ItemFixtures;

impl ItemFixtures {
    /// Fully described phone
    pub fn phone_details() -> ItemDetails {
        ItemDetails {
            category: "Phone".to_string(),
            description: "Black smartphone with a cracked screen protector".to_string(),
            brand: Some("Samsung".to_string()),
            color: Some("Black".to_string()),
            location: "Central Station, Platform 3".to_string(),
            date: DateFixtures::found_on(),
            time: Some(DateFixtures::found_at()),
            image: Some("uploads/phone.jpg".to_string()),
        }
    }

    /// Wallet with no brand or image
    pub fn wallet_details() -> ItemDetails {
        ItemDetails {
            category: "Wallet".to_string(),
            description: "Brown leather wallet with a library card".to_string(),
            brand: None,
            color: Some("Brown".to_string()),
            location: "City Park, north gate".to_string(),
            date: DateFixtures::found_on(),
            time: None,
            image: None,
        }
    }

    pub fn found_phone(finder: ParticipantId) -> NewItem {
        NewItem {
            item_type: ItemType::Found,
            details: Self::phone_details(),
            reporter: finder,
            match_score: Some(MatchScore::from_percent(dec!(87.5)).unwrap()),
        }
    }

    pub fn anonymous_wallet(finder: ParticipantId) -> NewItem {
        NewItem {
            item_type: ItemType::Anonymous,
            details: Self::wallet_details(),
            reporter: finder,
            match_score: None,
        }
    }

    pub fn lost_phone(owner: ParticipantId) -> NewItem {
        NewItem {
            item_type: ItemType::Lost,
            details: Self::phone_details(),
            reporter: owner,
            match_score: None,
        }
    }
}

/// Fixture for contact data
pub struct ContactFixtures;

impl ContactFixtures {
    pub fn finder_contact() -> ContactInfo {
        ContactInfo::new("finder@example.com", Some("+1-555-0100".to_string()))
    }

    /// Claimant with a fresh participant id
    pub fn claimant(email: &str) -> ClaimantInfo {
        ClaimantInfo::new(ParticipantId::new(), email)
    }
}

/// An engine wired to an outbox and a contact directory the test can read
pub struct TestWorld {
    pub engine: Arc<LifecycleEngine>,
    pub outbox: Arc<InMemoryOutbox>,
    pub directory: Arc<InMemoryContactDirectory>,
    /// Finder whose contact details are registered
    pub finder: ParticipantId,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        init_test_tracing();

        let finder = IdFixtures::finder_id();
        let outbox = Arc::new(InMemoryOutbox::new());
        let directory = Arc::new(
            InMemoryContactDirectory::new().with_contact(finder, ContactFixtures::finder_contact()),
        );
        let engine = LifecycleEngine::builder()
            .notifier(outbox.clone())
            .directory(directory.clone())
            .build();

        Self {
            engine: Arc::new(engine),
            outbox,
            directory,
            finder,
        }
    }

    /// Reports a found phone on behalf of the finder
    pub fn report_found(&self) -> Item {
        self.engine
            .report_item(ItemFixtures::found_phone(self.finder))
            .unwrap()
    }

    /// Reports an anonymous wallet on behalf of the finder
    pub fn report_anonymous(&self) -> Item {
        self.engine
            .report_item(ItemFixtures::anonymous_wallet(self.finder))
            .unwrap()
    }

    /// Submits a claim from a new claimant
    pub fn claim(&self, item: &Item, email: &str) -> ClaimRequest {
        self.engine
            .submit_claim(
                item.id(),
                ContactFixtures::claimant(email),
                "It's mine, the lock screen shows my dog",
            )
            .unwrap()
    }
}
