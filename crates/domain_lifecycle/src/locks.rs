//! Per-item write serialization
//!
//! Every mutation touching an item runs while holding that item's mutex, so
//! two operations on the same item never interleave. Operations on different
//! items only contend briefly on the table itself.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use core_kernel::ItemId;
use crate::error::LifecycleError;

/// Lock table keyed by item
#[derive(Debug, Default)]
pub struct ItemLocks {
    table: Mutex<HashMap<ItemId, Arc<Mutex<()>>>>,
}

impl ItemLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` while holding the lock for `item_id`
    pub fn with_item<T>(
        &self,
        item_id: ItemId,
        f: impl FnOnce() -> Result<T, LifecycleError>,
    ) -> Result<T, LifecycleError> {
        let slot = self.slot(item_id)?;
        let _guard = slot
            .lock()
            .map_err(|_| LifecycleError::Internal(format!("item lock poisoned: {}", item_id)))?;
        f()
    }

    /// Number of items that have been locked at least once
    pub fn len(&self) -> usize {
        self.table.lock().map(|t| t.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, item_id: ItemId) -> Result<Arc<Mutex<()>>, LifecycleError> {
        let mut table = self
            .table
            .lock()
            .map_err(|_| LifecycleError::Internal("item lock table poisoned".to_string()))?;
        Ok(Arc::clone(table.entry(item_id).or_default()))
    }
}
