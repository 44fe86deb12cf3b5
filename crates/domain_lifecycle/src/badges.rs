//! Helper badge tally
//!
//! Finders earn one credit each time an item they found is recovered. The
//! tally is advisory: a failure to record a credit is logged and does not
//! undo the recovery.

use std::collections::HashMap;
use std::sync::RwLock;

use core_kernel::{ParticipantId, PortError};

const STORE: &str = "helper badge tally";

#[derive(Debug, Default)]
pub struct HelperBadgeTally {
    credits: RwLock<HashMap<ParticipantId, u32>>,
}

impl HelperBadgeTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one credit; returns the new total
    pub fn award(&self, participant: ParticipantId) -> Result<u32, PortError> {
        let mut credits = self.credits.write().map_err(|_| PortError::poisoned(STORE))?;
        let total = credits.entry(participant).or_insert(0);
        *total = total.saturating_add(1);
        Ok(*total)
    }

    pub fn count(&self, participant: ParticipantId) -> Result<u32, PortError> {
        Ok(self
            .credits
            .read()
            .map_err(|_| PortError::poisoned(STORE))?
            .get(&participant)
            .copied()
            .unwrap_or(0))
    }
}
