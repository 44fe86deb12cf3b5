//! Public, read-only projection of an item
//!
//! Anonymous items keep their identifying details private until a claim on
//! them has been verified. The stored record is the same for every item
//! type; redaction happens here, at read time.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use core_kernel::ItemId;
use crate::badge::StatusBadge;
use crate::item::{Item, ItemStatus, ItemType, MatchScore};

/// What anyone browsing the listings may see of an item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicItemView {
    pub id: ItemId,
    pub item_type: ItemType,
    pub status: ItemStatus,
    pub badge: StatusBadge,
    pub category: String,
    pub location: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub time: Option<NaiveTime>,
    pub image: Option<String>,
    pub match_score: Option<MatchScore>,
    /// True when details were withheld
    pub redacted: bool,
}

impl PublicItemView {
    /// Builds the public view
    ///
    /// `claim_verified` reports whether any claim on the item has been
    /// verified; only then are an anonymous item's details revealed.
    /// Contact fields are never part of the public view.
    pub fn of(item: &Item, claim_verified: bool) -> Self {
        let details = item.details();
        let redacted = item.item_type() == ItemType::Anonymous && !claim_verified;

        let reveal = |value: Option<&String>| {
            if redacted {
                None
            } else {
                value.cloned()
            }
        };

        Self {
            id: item.id(),
            item_type: item.item_type(),
            status: item.status(),
            badge: StatusBadge::for_status(item.status()),
            category: details.category.clone(),
            location: details.location.clone(),
            date: details.date,
            description: reveal(Some(&details.description)),
            brand: reveal(details.brand.as_ref()),
            color: reveal(details.color.as_ref()),
            time: if redacted { None } else { details.time },
            image: reveal(details.image.as_ref()),
            match_score: item.match_score,
            redacted,
        }
    }

    /// Case-insensitive search over the fields this view shows
    ///
    /// Withheld details never match, so a redacted item cannot be found by
    /// guessing what it hides.
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        [
            Some(self.category.as_str()),
            self.description.as_deref(),
            self.brand.as_deref(),
            self.color.as_deref(),
            Some(self.location.as_str()),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}
