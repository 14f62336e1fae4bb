use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use stockroom_core::{DomainError, DomainResult};

use crate::item::{InventoryRecord, Item, ItemPatch};

/// In-memory inventory store.
///
/// Owns the id → item map and guards every mutation: keys are unique, and
/// `price > 0` / `quantity >= 0` hold for every stored item at all times.
/// The map preserves insertion order, which is what name lookup iterates in.
///
/// Every operation is a direct, synchronous check-then-act against the map.
/// Mutations take the write lock so create-if-absent and merge-then-write are
/// atomic with respect to concurrent callers; reads share the read lock.
#[derive(Debug, Default)]
pub struct InventoryStore {
    items: RwLock<IndexMap<String, Item>>,
}

impl InventoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with the fixed example dataset.
    pub fn with_sample_items() -> Self {
        let mut items = IndexMap::new();
        items.insert("item1".to_string(), Item::new("Laptop", 1200.0, 5));
        items.insert("item2".to_string(), Item::new("Smartphone", 800.0, 10));
        items.insert("item3".to_string(), Item::new("Tablet", 600.0, 7));
        Self {
            items: RwLock::new(items),
        }
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, IndexMap<String, Item>>> {
        self.items
            .read()
            .map_err(|_| DomainError::internal("inventory lock poisoned"))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, IndexMap<String, Item>>> {
        self.items
            .write()
            .map_err(|_| DomainError::internal("inventory lock poisoned"))
    }

    /// Insert a new record under a caller-assigned id.
    ///
    /// Fails with `AlreadyExists` if the id is taken, `InvalidItem` if the
    /// item violates the constraints. On failure the store is unchanged.
    pub fn create(&self, id: &str, item: Item) -> DomainResult<InventoryRecord> {
        let mut items = self.write()?;
        if items.contains_key(id) {
            return Err(DomainError::already_exists(id));
        }
        item.validate()?;
        items.insert(id.to_string(), item.clone());
        Ok(InventoryRecord::new(id, item))
    }

    /// Look a record up by id.
    pub fn get_by_id(&self, id: &str) -> DomainResult<InventoryRecord> {
        let items = self.read()?;
        items
            .get(id)
            .map(|item| InventoryRecord::new(id, item.clone()))
            .ok_or(DomainError::NotFound)
    }

    /// Case-insensitive name lookup: first match in insertion order.
    ///
    /// Fails with `InvalidArgument` on an empty name, `NotFound` when no
    /// stored item matches.
    pub fn get_by_name(&self, name: &str) -> DomainResult<InventoryRecord> {
        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument("name cannot be empty"));
        }
        let wanted = name.to_lowercase();
        let items = self.read()?;
        items
            .iter()
            .find(|(_, item)| item.name.to_lowercase() == wanted)
            .map(|(id, item)| InventoryRecord::new(id.clone(), item.clone()))
            .ok_or(DomainError::NotFound)
    }

    /// Lookup by id with an optional name filter.
    ///
    /// A supplied filter that does not case-insensitively match the stored
    /// name fails with `NameMismatch`, a distinct kind from `NotFound` so
    /// callers can tell "no such id" apart from "id exists, wrong name".
    /// An empty filter is treated as absent.
    pub fn get_combined(
        &self,
        id: &str,
        name_filter: Option<&str>,
    ) -> DomainResult<InventoryRecord> {
        let record = self.get_by_id(id)?;
        if let Some(filter) = name_filter.filter(|f| !f.trim().is_empty()) {
            if record.item.name.to_lowercase() != filter.to_lowercase() {
                return Err(DomainError::NameMismatch);
            }
        }
        Ok(record)
    }

    /// Merge `patch` onto the existing record and commit the result.
    ///
    /// Only fields present in the patch overwrite the prior values. The
    /// merged item is re-validated before being written, and the swap happens
    /// under the write lock, so the stored value is never observably
    /// half-updated.
    pub fn update(&self, id: &str, patch: &ItemPatch) -> DomainResult<InventoryRecord> {
        let mut items = self.write()?;
        let existing = items.get(id).ok_or(DomainError::NotFound)?;
        let merged = existing.merged(patch);
        merged.validate()?;
        items.insert(id.to_string(), merged.clone());
        Ok(InventoryRecord::new(id, merged))
    }

    /// Remove a record. Fails with `NotFound` if the id is absent.
    pub fn delete(&self, id: &str) -> DomainResult<()> {
        let mut items = self.write()?;
        // shift_remove keeps the remaining entries in insertion order.
        items
            .shift_remove(id)
            .map(|_| ())
            .ok_or(DomainError::NotFound)
    }

    /// Snapshot of all records in insertion order.
    pub fn list(&self) -> DomainResult<Vec<InventoryRecord>> {
        let items = self.read()?;
        Ok(items
            .iter()
            .map(|(id, item)| InventoryRecord::new(id.clone(), item.clone()))
            .collect())
    }

    pub fn len(&self) -> usize {
        self.read().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
