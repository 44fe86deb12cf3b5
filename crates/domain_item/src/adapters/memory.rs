//! In-memory item registry

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use core_kernel::{DomainPort, HealthCheckResult, HealthCheckable, ItemId, PortError};

use crate::item::Item;
use crate::ports::{ItemQuery, ItemRegistry};

const STORE: &str = "item registry";

/// In-memory implementation of ItemRegistry
#[derive(Debug, Default)]
pub struct InMemoryItemRegistry {
    items: RwLock<HashMap<ItemId, Item>>,
}

impl InMemoryItemRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates with items
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let items = items.into_iter().map(|item| (item.id(), item)).collect();
        Self {
            items: RwLock::new(items),
        }
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.items.read().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DomainPort for InMemoryItemRegistry {}

impl HealthCheckable for InMemoryItemRegistry {
    fn health_check(&self) -> HealthCheckResult {
        if self.items.is_poisoned() {
            HealthCheckResult::unhealthy("memory-item-registry", "lock poisoned")
        } else {
            HealthCheckResult::healthy("memory-item-registry")
        }
    }
}

impl ItemRegistry for InMemoryItemRegistry {
    fn insert(&self, item: Item) -> Result<(), PortError> {
        let mut items = self.items.write().map_err(|_| PortError::poisoned(STORE))?;
        if items.contains_key(&item.id()) {
            return Err(PortError::conflict(format!("item {} already exists", item.id())));
        }
        debug!(item_id = %item.id(), item_type = %item.item_type(), "Item stored");
        items.insert(item.id(), item);
        Ok(())
    }

    fn get(&self, id: ItemId) -> Result<Item, PortError> {
        self.items
            .read()
            .map_err(|_| PortError::poisoned(STORE))?
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Item", id))
    }

    fn replace(&self, item: Item) -> Result<(), PortError> {
        let mut items = self.items.write().map_err(|_| PortError::poisoned(STORE))?;
        let slot = items
            .get_mut(&item.id())
            .ok_or_else(|| PortError::not_found("Item", item.id()))?;
        debug!(item_id = %item.id(), status = %item.status(), "Item replaced");
        *slot = item;
        Ok(())
    }

    fn find(&self, query: &ItemQuery) -> Result<Vec<Item>, PortError> {
        let items = self.items.read().map_err(|_| PortError::poisoned(STORE))?;
        let mut results: Vec<Item> = items
            .values()
            .filter(|item| query.matches(item))
            .cloned()
            .collect();

        // v7 ids break ties between items created in the same instant
        results.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id().as_uuid().cmp(a.id().as_uuid()))
        });

        let offset = query.offset.unwrap_or(0) as usize;
        let limit = query.limit.map(|l| l as usize).unwrap_or(usize::MAX);
        Ok(results.into_iter().skip(offset).take(limit).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::{AdapterHealth, ParticipantId};
    use crate::item::{ItemDetails, ItemType, NewItem};

    fn item(category: &str) -> Item {
        Item::report(NewItem {
            item_type: ItemType::Found,
            details: ItemDetails {
                category: category.to_string(),
                description: "Found near the fountain".to_string(),
                brand: None,
                color: None,
                location: "City Park".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
                time: None,
                image: None,
            },
            reporter: ParticipantId::new(),
            match_score: None,
        })
        .unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let registry = InMemoryItemRegistry::new();
        let wallet = item("Wallet");
        let id = wallet.id();

        registry.insert(wallet).unwrap();

        assert_eq!(registry.get(id).unwrap().details().category, "Wallet");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_insert_conflicts() {
        let registry = InMemoryItemRegistry::new();
        let wallet = item("Wallet");

        registry.insert(wallet.clone()).unwrap();
        let err = registry.insert(wallet).unwrap_err();

        assert!(matches!(err, PortError::Conflict { .. }));
    }

    #[test]
    fn test_get_unknown_is_not_found() {
        let registry = InMemoryItemRegistry::new();
        assert!(registry.get(ItemId::new()).unwrap_err().is_not_found());
    }

    #[test]
    fn test_replace_unknown_is_not_found() {
        let registry = InMemoryItemRegistry::new();
        assert!(registry.replace(item("Keys")).unwrap_err().is_not_found());
    }

    #[test]
    fn test_health_check() {
        let registry = InMemoryItemRegistry::new();
        assert_eq!(registry.health_check().status, AdapterHealth::Healthy);
    }
}
