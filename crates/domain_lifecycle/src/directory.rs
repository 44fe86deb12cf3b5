//! Contact directory port
//!
//! Finder contact details live outside the item and claim stores. The engine
//! looks them up when a claim is verified; an unknown finder is not an error.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use core_kernel::{DomainPort, HealthCheckResult, HealthCheckable, ParticipantId, PortError};
use domain_claims::ContactInfo;

const STORE: &str = "contact directory";

/// Lookup of a participant's contact details
pub trait ContactDirectory: DomainPort + HealthCheckable {
    /// Contact details for `participant`, if known
    fn contact_for(&self, participant: ParticipantId) -> Result<Option<ContactInfo>, PortError>;
}

/// In-memory contact directory
#[derive(Debug, Default)]
pub struct InMemoryContactDirectory {
    contacts: RwLock<HashMap<ParticipantId, ContactInfo>>,
}

impl InMemoryContactDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records or replaces a participant's contact details
    pub fn register(&self, participant: ParticipantId, contact: ContactInfo) -> Result<(), PortError> {
        let mut contacts = self.contacts.write().map_err(|_| PortError::poisoned(STORE))?;
        debug!(participant = %participant, "Contact registered");
        contacts.insert(participant, contact);
        Ok(())
    }

    /// Builder form of [`register`](Self::register)
    pub fn with_contact(self, participant: ParticipantId, contact: ContactInfo) -> Self {
        if let Ok(mut contacts) = self.contacts.write() {
            contacts.insert(participant, contact);
        }
        self
    }
}

impl DomainPort for InMemoryContactDirectory {}

impl HealthCheckable for InMemoryContactDirectory {
    fn health_check(&self) -> HealthCheckResult {
        if self.contacts.is_poisoned() {
            HealthCheckResult::unhealthy("memory-contact-directory", "lock poisoned")
        } else {
            HealthCheckResult::healthy("memory-contact-directory")
        }
    }
}

impl ContactDirectory for InMemoryContactDirectory {
    fn contact_for(&self, participant: ParticipantId) -> Result<Option<ContactInfo>, PortError> {
        Ok(self
            .contacts
            .read()
            .map_err(|_| PortError::poisoned(STORE))?
            .get(&participant)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let finder = ParticipantId::new();
        let directory = InMemoryContactDirectory::new()
            .with_contact(finder, ContactInfo::new("finder@example.com", None));

        let contact = directory.contact_for(finder).unwrap().unwrap();
        assert_eq!(contact.email, "finder@example.com");
        assert!(directory.contact_for(ParticipantId::new()).unwrap().is_none());
    }

    #[test]
    fn test_register_replaces() {
        let directory = InMemoryContactDirectory::new();
        let finder = ParticipantId::new();
        directory
            .register(finder, ContactInfo::new("old@example.com", None))
            .unwrap();
        directory
            .register(finder, ContactInfo::new("new@example.com", None))
            .unwrap();

        assert_eq!(directory.contact_for(finder).unwrap().unwrap().email, "new@example.com");
    }
}
