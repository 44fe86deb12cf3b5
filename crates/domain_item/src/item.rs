//! Item aggregate

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ItemId, ParticipantId};
use crate::error::ItemError;

/// What kind of report an item is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// Reported by the owner, who is looking for it
    Lost,
    /// Reported by a finder who is holding it
    Found,
    /// Found, but details stay hidden until a claim is verified
    Anonymous,
}

impl ItemType {
    /// Whether claimants can submit ownership claims against this item
    pub fn accepts_claims(self) -> bool {
        matches!(self, ItemType::Found | ItemType::Anonymous)
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ItemType::Lost => "lost",
            ItemType::Found => "found",
            ItemType::Anonymous => "anonymous",
        };
        f.write_str(s)
    }
}

/// Item status
///
/// Serialized with the exact labels shown on status badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemStatus {
    /// Open for claims (found/anonymous) or finder responses (lost)
    #[serde(rename = "Active")]
    Active,
    /// At least one claim is awaiting the finder's review
    #[serde(rename = "Verification Pending")]
    VerificationPending,
    /// Handover confirmed after a verified claim
    #[serde(rename = "Item on its way")]
    ItemOnItsWay,
    /// Owner confirmed receipt
    #[serde(rename = "Recovered")]
    Recovered,
    /// Administratively closed
    #[serde(rename = "Closed")]
    Closed,
}

impl ItemStatus {
    /// Display label, identical to the serialized form
    pub fn label(self) -> &'static str {
        match self {
            ItemStatus::Active => "Active",
            ItemStatus::VerificationPending => "Verification Pending",
            ItemStatus::ItemOnItsWay => "Item on its way",
            ItemStatus::Recovered => "Recovered",
            ItemStatus::Closed => "Closed",
        }
    }

    /// Recovered and Closed accept no further transitions
    pub fn is_terminal(self) -> bool {
        matches!(self, ItemStatus::Recovered | ItemStatus::Closed)
    }

    /// Checks the transition table
    pub fn can_transition_to(self, target: ItemStatus) -> bool {
        use ItemStatus::*;
        matches!(
            (self, target),
            (Active, VerificationPending) |
            (VerificationPending, Active) |
            (VerificationPending, ItemOnItsWay) |
            (ItemOnItsWay, Recovered) |
            (Active, Closed) |
            (VerificationPending, Closed) |
            (ItemOnItsWay, Closed)
        )
    }

    /// All statuses, in lifecycle order
    pub fn all() -> [ItemStatus; 5] {
        [
            ItemStatus::Active,
            ItemStatus::VerificationPending,
            ItemStatus::ItemOnItsWay,
            ItemStatus::Recovered,
            ItemStatus::Closed,
        ]
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Advisory similarity score from an external matching service
///
/// Stored as a percentage in `[0, 100]`. Nothing in the lifecycle reads it;
/// it is carried for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchScore(Decimal);

impl MatchScore {
    /// Creates a score from a percentage in `[0, 100]`
    pub fn from_percent(percent: Decimal) -> Result<Self, ItemError> {
        if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
            return Err(ItemError::InvalidMatchScore(format!(
                "{} is outside 0-100",
                percent
            )));
        }
        Ok(Self(percent.round_dp(2)))
    }

    /// Creates a score from a similarity ratio in `[0, 1]`
    pub fn from_ratio(ratio: Decimal) -> Result<Self, ItemError> {
        Self::from_percent(ratio * Decimal::ONE_HUNDRED)
    }

    /// Returns the percentage
    pub fn percent(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}

/// Descriptive attributes, fixed once the item is reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetails {
    pub category: String,
    pub description: String,
    pub brand: Option<String>,
    pub color: Option<String>,
    /// Where it was lost or found
    pub location: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    /// Reference to an uploaded image
    pub image: Option<String>,
}

impl ItemDetails {
    /// Checks the required text fields
    pub fn validate(&self) -> Result<(), ItemError> {
        for (field, value) in [
            ("category", &self.category),
            ("description", &self.description),
            ("location", &self.location),
        ] {
            if value.trim().is_empty() {
                return Err(ItemError::invalid(format!("{} is required", field)));
            }
        }
        Ok(())
    }

    /// Case-insensitive search over the free-text fields
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        [
            Some(self.category.as_str()),
            Some(self.description.as_str()),
            self.brand.as_deref(),
            self.color.as_deref(),
            Some(self.location.as_str()),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Request to report a new item
#[derive(Debug, Clone)]
pub struct NewItem {
    pub item_type: ItemType,
    pub details: ItemDetails,
    /// The participant filing the report
    pub reporter: ParticipantId,
    pub match_score: Option<MatchScore>,
}

/// A reported item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    item_type: ItemType,
    status: ItemStatus,
    details: ItemDetails,
    /// Owner; set at report time for lost items, on verification for found ones
    pub owner_id: Option<ParticipantId>,
    /// Finder; set at report time for found/anonymous items
    pub finder_id: Option<ParticipantId>,
    /// Owner contact, populated once a claim is verified
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub match_score: Option<MatchScore>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Creates a new Active item from a report
    pub fn report(new_item: NewItem) -> Result<Self, ItemError> {
        new_item.details.validate()?;

        let now = Utc::now();
        let (owner_id, finder_id) = match new_item.item_type {
            ItemType::Lost => (Some(new_item.reporter), None),
            ItemType::Found | ItemType::Anonymous => (None, Some(new_item.reporter)),
        };

        Ok(Self {
            id: ItemId::new_v7(),
            item_type: new_item.item_type,
            status: ItemStatus::Active,
            details: new_item.details,
            owner_id,
            finder_id,
            contact_email: None,
            contact_phone: None,
            match_score: new_item.match_score,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    pub fn status(&self) -> ItemStatus {
        self.status
    }

    pub fn details(&self) -> &ItemDetails {
        &self.details
    }

    /// Moves the item to `target` if the transition table allows it
    pub fn transition_to(&mut self, target: ItemStatus) -> Result<(), ItemError> {
        if !self.status.can_transition_to(target) {
            return Err(ItemError::InvalidStatusTransition {
                from: self.status.to_string(),
                to: target.to_string(),
            });
        }
        self.status = target;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Records the verified owner and their contact details
    pub fn record_owner_contact(
        &mut self,
        owner_id: ParticipantId,
        email: impl Into<String>,
        phone: Option<String>,
    ) {
        self.owner_id = Some(owner_id);
        self.contact_email = Some(email.into());
        self.contact_phone = phone;
        self.updated_at = Utc::now();
    }

    /// Whether a participant is the owner or the finder of this item
    pub fn involves(&self, participant: ParticipantId) -> bool {
        self.owner_id == Some(participant) || self.finder_id == Some(participant)
    }
}
