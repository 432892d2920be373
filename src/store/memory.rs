//! Process-local [`RecordStore`] backed by a map of collection name to JSON text.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{RecordStore, StoreError};

/// In-memory store. Nothing survives the process; used by tests and demos.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn load(&self, collection: &str) -> Result<Option<String>, StoreError> {
        let collections = self.collections.read().map_err(|_| StoreError::Poisoned)?;
        Ok(collections.get(collection).cloned())
    }

    fn save(&self, collection: &str, json: String) -> Result<(), StoreError> {
        let mut collections = self.collections.write().map_err(|_| StoreError::Poisoned)?;
        collections.insert(collection.to_string(), json);
        Ok(())
    }
}
