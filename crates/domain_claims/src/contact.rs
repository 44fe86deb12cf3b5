//! Contact details exchanged after verification

use serde::{Deserialize, Serialize};

use core_kernel::{ClaimRequestId, ItemId};
use crate::claim::{ClaimRequest, ClaimStatus};
use crate::error::ClaimError;

/// How a party prefers to be reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredContactMethod {
    Email,
    Phone,
    Both,
}

/// A party's contact details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: Option<String>,
    pub preferred_method: PreferredContactMethod,
}

impl ContactInfo {
    /// Creates contact info, preferring both channels when a phone is given
    pub fn new(email: impl Into<String>, phone: Option<String>) -> Self {
        let preferred_method = if phone.is_some() {
            PreferredContactMethod::Both
        } else {
            PreferredContactMethod::Email
        };
        Self {
            email: email.into(),
            phone,
            preferred_method,
        }
    }

    pub fn with_preference(mut self, method: PreferredContactMethod) -> Self {
        self.preferred_method = method;
        self
    }
}

/// Which side of the exchange a party is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyRole {
    Finder,
    Owner,
}

/// Contact details shared between owner and finder for a verified claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactExchange {
    pub item_id: ItemId,
    pub claim_id: ClaimRequestId,
    /// The verified claimant
    pub owner: ContactInfo,
    /// The finder's details, when the contact directory knows them
    pub finder: Option<ContactInfo>,
}

impl ContactExchange {
    /// Builds the exchange for a verified claim
    pub fn for_verified_claim(
        claim: &ClaimRequest,
        finder: Option<ContactInfo>,
    ) -> Result<Self, ClaimError> {
        if claim.status() != ClaimStatus::Verified {
            return Err(ClaimError::ClaimNotVerified);
        }
        Ok(Self {
            item_id: claim.item_id(),
            claim_id: claim.id(),
            owner: ContactInfo::new(claim.claimant_email.clone(), claim.claimant_phone.clone()),
            finder,
        })
    }

    /// What the party in `viewer` sees: the other side's details
    pub fn counterpart_for(&self, viewer: PartyRole) -> Option<&ContactInfo> {
        match viewer {
            PartyRole::Finder => Some(&self.owner),
            PartyRole::Owner => self.finder.as_ref(),
        }
    }
}
