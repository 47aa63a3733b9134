//! In-memory key-value store.

use crate::storage::kv::{KeyValueStore, StorageResult};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Process-local store whose clones share the same records.
///
/// Handing one clone to the persistence bridge and keeping another lets a
/// caller inspect what the bridge wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    records: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one record.
    pub fn with_record(key: &str, value: impl Into<String>) -> Self {
        let store = Self::new();
        store
            .records
            .borrow_mut()
            .insert(key.to_string(), value.into());
        store
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.records.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.records
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<bool> {
        Ok(self.records.borrow_mut().remove(key).is_some())
    }
}
