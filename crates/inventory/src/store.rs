use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use stockroom_core::{DomainError, DomainResult, ItemId};

use crate::item::{Category, Item, ItemPatch};
use crate::query::ItemQuery;

/// Storage for the inventory table.
///
/// Every operation is a single step against the table: implementations must
/// make each read-modify-write atomic with respect to concurrent callers.
pub trait InventoryStore: Send + Sync {
    /// Snapshot of the whole table.
    fn list(&self) -> BTreeMap<ItemId, Item>;
    fn get(&self, id: ItemId) -> DomainResult<Item>;
    /// Items matching `query`, in table order.
    fn select(&self, query: &ItemQuery) -> Vec<Item>;
    /// Insert a new item. Never overwrites an existing id.
    fn create(&self, item: Item) -> DomainResult<Item>;
    fn update(&self, id: ItemId, patch: ItemPatch) -> DomainResult<Item>;
    /// Remove an item, returning what was stored.
    fn delete(&self, id: ItemId) -> DomainResult<Item>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> InventoryStore for Arc<S>
where
    S: InventoryStore + ?Sized,
{
    fn list(&self) -> BTreeMap<ItemId, Item> {
        (**self).list()
    }

    fn get(&self, id: ItemId) -> DomainResult<Item> {
        (**self).get(id)
    }

    fn select(&self, query: &ItemQuery) -> Vec<Item> {
        (**self).select(query)
    }

    fn create(&self, item: Item) -> DomainResult<Item> {
        (**self).create(item)
    }

    fn update(&self, id: ItemId, patch: ItemPatch) -> DomainResult<Item> {
        (**self).update(id, patch)
    }

    fn delete(&self, id: ItemId) -> DomainResult<Item> {
        (**self).delete(id)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// The in-process inventory table.
#[derive(Debug)]
pub struct InMemoryInventory {
    inner: RwLock<BTreeMap<ItemId, Item>>,
}

impl InMemoryInventory {
    /// Empty table (tests).
    pub fn new() -> Self {
        Self::from_items(Vec::new())
    }

    /// Table holding the three starter records (Hammer, Pliers, Nails).
    pub fn seeded() -> Self {
        Self::from_items(seed_items())
    }

    /// Table keyed by each item's own id. A later duplicate replaces an earlier one.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let map = items.into_iter().map(|item| (item.id, item)).collect();
        Self {
            inner: RwLock::new(map),
        }
    }
}

impl Default for InMemoryInventory {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Starter records every fresh service begins with.
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new(ItemId::new(0), "Hammer", 9.99, 20, Category::Tools),
        Item::new(ItemId::new(1), "Pliers", 5.99, 20, Category::Tools),
        Item::new(ItemId::new(2), "Nails", 1.99, 100, Category::Consumables),
    ]
}

impl InventoryStore for InMemoryInventory {
    fn list(&self) -> BTreeMap<ItemId, Item> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn get(&self, id: ItemId) -> DomainResult<Item> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.get(&id).cloned().ok_or(DomainError::not_found(id))
    }

    fn select(&self, query: &ItemQuery) -> Vec<Item> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.values()
            .filter(|item| query.matches(item))
            .cloned()
            .collect()
    }

    fn create(&self, item: Item) -> DomainResult<Item> {
        let mut map = self.inner.write().map_err(|_| DomainError::Unavailable)?;
        if map.contains_key(&item.id) {
            tracing::debug!(item_id = %item.id, "create rejected: id already stored");
            return Err(DomainError::conflict(item.id));
        }

        map.insert(item.id, item.clone());
        tracing::info!(item_id = %item.id, name = %item.name, "item created");
        Ok(item)
    }

    fn update(&self, id: ItemId, patch: ItemPatch) -> DomainResult<Item> {
        let mut map = self.inner.write().map_err(|_| DomainError::Unavailable)?;
        let item = map.get_mut(&id).ok_or(DomainError::not_found(id))?;

        if patch.is_empty() {
            return Err(DomainError::validation("No parameters provided for update."));
        }

        patch.apply_to(item);
        tracing::info!(item_id = %id, "item updated");
        Ok(item.clone())
    }

    fn delete(&self, id: ItemId) -> DomainResult<Item> {
        let mut map = self.inner.write().map_err(|_| DomainError::Unavailable)?;
        let item = map.remove(&id).ok_or(DomainError::not_found(id))?;
        tracing::info!(item_id = %id, "item deleted");
        Ok(item)
    }

    fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
