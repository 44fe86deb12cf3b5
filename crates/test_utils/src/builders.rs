//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! Free-text defaults come from `fake`, so tests only pin the fields they care
//! about.

use chrono::NaiveDate;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::{Sentence, Word};
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rust_decimal::Decimal;

use core_kernel::ParticipantId;
use domain_claims::ClaimantInfo;
use domain_item::{ItemDetails, ItemType, MatchScore, NewItem};

use crate::fixtures::DateFixtures;

/// Builder for item reports
pub struct NewItemBuilder {
    item_type: ItemType,
    reporter: ParticipantId,
    category: String,
    description: String,
    brand: Option<String>,
    color: Option<String>,
    location: String,
    date: NaiveDate,
    image: Option<String>,
    match_score: Option<MatchScore>,
}

impl Default for NewItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NewItemBuilder {
    /// Creates a found-item report with generated text
    pub fn new() -> Self {
        Self {
            item_type: ItemType::Found,
            reporter: ParticipantId::new(),
            category: Word().fake(),
            description: Sentence(4..8).fake(),
            brand: None,
            color: None,
            location: Sentence(2..4).fake(),
            date: DateFixtures::found_on(),
            image: None,
            match_score: None,
        }
    }

    pub fn lost(mut self) -> Self {
        self.item_type = ItemType::Lost;
        self
    }

    pub fn found(mut self) -> Self {
        self.item_type = ItemType::Found;
        self
    }

    pub fn anonymous(mut self) -> Self {
        self.item_type = ItemType::Anonymous;
        self
    }

    pub fn with_type(mut self, item_type: ItemType) -> Self {
        self.item_type = item_type;
        self
    }

    pub fn with_reporter(mut self, reporter: ParticipantId) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Sets the match score from a percentage
    ///
    /// # Panics
    ///
    /// Panics if the percentage is outside 0-100
    pub fn with_match_percent(mut self, percent: Decimal) -> Self {
        self.match_score = Some(MatchScore::from_percent(percent).unwrap());
        self
    }

    pub fn build(self) -> NewItem {
        NewItem {
            item_type: self.item_type,
            details: ItemDetails {
                category: self.category,
                description: self.description,
                brand: self.brand,
                color: self.color,
                location: self.location,
                date: self.date,
                time: None,
                image: self.image,
            },
            reporter: self.reporter,
            match_score: self.match_score,
        }
    }
}

/// Builder for claimant details
pub struct ClaimantBuilder {
    claimant_id: ParticipantId,
    email: String,
    phone: Option<String>,
}

impl Default for ClaimantBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimantBuilder {
    /// New claimant with a generated email and no phone
    pub fn new() -> Self {
        Self {
            claimant_id: ParticipantId::new(),
            email: SafeEmail().fake(),
            phone: None,
        }
    }

    pub fn with_id(mut self, claimant_id: ParticipantId) -> Self {
        self.claimant_id = claimant_id;
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Adds a generated phone number
    pub fn with_any_phone(mut self) -> Self {
        self.phone = Some(PhoneNumber().fake());
        self
    }

    pub fn build(self) -> ClaimantInfo {
        let claimant = ClaimantInfo::new(self.claimant_id, self.email);
        match self.phone {
            Some(phone) => claimant.with_phone(phone),
            None => claimant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_item_is_valid() {
        let new_item = NewItemBuilder::new().anonymous().build();
        assert_eq!(new_item.item_type, ItemType::Anonymous);
        assert!(new_item.details.validate().is_ok());
    }

    #[test]
    fn test_generated_claimant_has_email() {
        let claimant = ClaimantBuilder::new().with_any_phone().build();
        assert!(claimant.email.contains('@'));
        assert!(claimant.phone.is_some());
    }
}
