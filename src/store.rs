use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single stored item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub price: i64,
}

impl Item {
    pub fn new(id: i64, name: impl Into<String>, price: i64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// Errors returned by store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("item {0} not found")]
    NotFound(i64),
    #[error("lock poisoned")]
    LockPoisoned,
}

#[derive(Debug, Default)]
struct Inner {
    items: Vec<Item>,
    /// Number of items ever inserted, the last assigned id
    inserted: i64,
}

impl Inner {
    fn insert(&mut self, name: String, price: i64) -> Item {
        self.inserted += 1;
        let item = Item::new(self.inserted, name, price);
        self.items.push(item.clone());
        item
    }
}

/// In-memory item store, insertion order preserved
pub struct ItemStore {
    data: RwLock<Inner>,
}

impl ItemStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            data: RwLock::new(Inner::default()),
        }
    }

    /// Create a store holding the two seed items
    pub fn seeded() -> Self {
        let mut inner = Inner::default();
        inner.insert("Apple".to_string(), 100);
        inner.insert("Banana".to_string(), 50);
        Self {
            data: RwLock::new(inner),
        }
    }

    /// All items in insertion order
    pub fn list(&self) -> Result<Vec<Item>, StoreError> {
        let data = self.data.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(data.items.clone())
    }

    pub fn get(&self, id: i64) -> Result<Item, StoreError> {
        let data = self.data.read().map_err(|_| StoreError::LockPoisoned)?;
        data.items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Append a new item under the next id and return it
    pub fn create(&self, name: String, price: i64) -> Result<Item, StoreError> {
        let mut data = self.data.write().map_err(|_| StoreError::LockPoisoned)?;
        Ok(data.insert(name, price))
    }

    /// Remove the item with the given id, returning it
    pub fn delete(&self, id: i64) -> Result<Item, StoreError> {
        let mut data = self.data.write().map_err(|_| StoreError::LockPoisoned)?;
        let pos = data
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;
        // Vec::remove shifts the tail, keeping relative order
        Ok(data.items.remove(pos))
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        let data = self.data.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(data.items.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

#[cfg(test)]
impl ItemStore {
    /// Poison the lock by panicking while holding it
    pub(crate) fn poison(&self) {
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = self.data.write().unwrap();
            panic!("poisoning store lock");
        }));
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
