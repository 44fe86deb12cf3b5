//! Item Registry Port
//!
//! The registry owns item records. It stores and returns whole records and
//! never decides on status itself: status changes arrive as already-validated
//! records from the lifecycle engine through [`ItemRegistry::replace`].

use core_kernel::{DomainPort, HealthCheckable, ItemId, ParticipantId, PortError};

use crate::item::{Item, ItemStatus, ItemType};

/// Query parameters for finding items
#[derive(Debug, Clone, Default)]
pub struct ItemQuery {
    /// Filter by report type
    pub item_type: Option<ItemType>,
    /// Filter by status
    pub status: Option<ItemStatus>,
    /// Filter by category (case-insensitive exact match)
    pub category: Option<String>,
    /// Items where this participant is owner or finder
    pub participant: Option<ParticipantId>,
    /// Free-text search over category, description, brand, color and location
    pub search: Option<String>,
    /// Limit results
    pub limit: Option<u32>,
    /// Offset for pagination
    pub offset: Option<u32>,
}

impl ItemQuery {
    /// Creates a query to find by report type
    pub fn by_type(item_type: ItemType) -> Self {
        Self {
            item_type: Some(item_type),
            ..Default::default()
        }
    }

    /// Creates a query to find by status
    pub fn by_status(status: ItemStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Creates a query for one participant's items
    pub fn for_participant(participant: ParticipantId) -> Self {
        Self {
            participant: Some(participant),
            ..Default::default()
        }
    }

    /// Adds a free-text search term
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Adds pagination to the query
    pub fn paginate(mut self, limit: u32, offset: u32) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }

    /// Whether an item satisfies every filter set on this query
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(item_type) = self.item_type {
            if item.item_type() != item_type {
                return false;
            }
        }
        if let Some(status) = self.status {
            if item.status() != status {
                return false;
            }
        }
        if let Some(ref category) = self.category {
            if !item.details().category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(participant) = self.participant {
            if !item.involves(participant) {
                return false;
            }
        }
        if let Some(ref text) = self.search {
            if !text.trim().is_empty() && !item.details().matches_text(text.trim()) {
                return false;
            }
        }
        true
    }
}

/// Storage port for item records
pub trait ItemRegistry: DomainPort + HealthCheckable {
    /// Stores a newly reported item
    ///
    /// Fails with `Conflict` if an item with the same id already exists.
    fn insert(&self, item: Item) -> Result<(), PortError>;

    /// Returns an item by id
    fn get(&self, id: ItemId) -> Result<Item, PortError>;

    /// Replaces an existing item record
    fn replace(&self, item: Item) -> Result<(), PortError>;

    /// Finds items matching a query, newest first
    fn find(&self, query: &ItemQuery) -> Result<Vec<Item>, PortError>;
}
