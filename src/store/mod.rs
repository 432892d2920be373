//! Record repository: named collections of flat JSON records.
//!
//! A store only knows raw JSON text per collection name, the way a browser
//! `localStorage` key does. Typed access goes through [`Collection`], which
//! implements the load-all / save-all contract, and [`load_records`] for
//! read-only views.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub const CUSTOMERS: &str = "clientes";
pub const SUPPLIERS: &str = "fornecedores";
pub const EMPLOYEES: &str = "funcionarios";
pub const PRODUCTS: &str = "produtos";
pub const ORDERS: &str = "pedidos";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to serialize collection {collection}: {source}")]
    Serialize {
        collection: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Collection {collection} is not a valid record array: {source}")]
    Corrupt {
        collection: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("I/O error on collection {collection}: {source}")]
    Io {
        collection: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Store lock poisoned")]
    Poisoned,
}

/// A process-wide key-value store holding one JSON document per collection.
///
/// No transactions and no schema: `save` overwrites the whole collection.
pub trait RecordStore: Send + Sync + 'static {
    /// Raw JSON text stored under `collection`, or `None` if nothing was ever saved.
    fn load(&self, collection: &str) -> Result<Option<String>, StoreError>;

    fn save(&self, collection: &str, json: String) -> Result<(), StoreError>;
}

/// One element of a stored array. Elements that do not parse as a record are
/// kept verbatim and written back on the next save.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
enum Entry<T> {
    Record(T),
    Unparsed(Value),
}

/// A whole collection loaded for a write.
///
/// Only the array itself has to be valid JSON. Each element is parsed on its
/// own, so a single bad record is carried along untouched instead of taking
/// the rest of the collection with it.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    name: String,
    entries: Vec<Entry<T>>,
}

impl<T: Serialize + DeserializeOwned> Collection<T> {
    /// Loads `collection`. A missing key or a stored `null` is an empty
    /// collection; a document that is not a JSON array is an error, so that
    /// nothing gets saved over it.
    pub fn load(store: &dyn RecordStore, collection: &str) -> Result<Self, StoreError> {
        let elements = match store.load(collection)? {
            Some(raw) => serde_json::from_str::<Option<Vec<Value>>>(&raw)
                .map_err(|source| StoreError::Corrupt {
                    collection: collection.to_string(),
                    source,
                })?
                .unwrap_or_default(),
            None => Vec::new(),
        };

        let entries: Vec<Entry<T>> = elements
            .into_iter()
            .enumerate()
            .map(|(index, value)| match T::deserialize(&value) {
                Ok(record) => Entry::Record(record),
                Err(e) => {
                    warn!(collection, index, error = %e, "Skipping unreadable record");
                    Entry::Unparsed(value)
                }
            })
            .collect();

        debug!(collection, count = entries.len(), "Collection loaded");
        Ok(Self {
            name: collection.to_string(),
            entries,
        })
    }

    pub fn records(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Record(record) => Some(record),
            Entry::Unparsed(_) => None,
        })
    }

    pub fn records_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.iter_mut().filter_map(|entry| match entry {
            Entry::Record(record) => Some(record),
            Entry::Unparsed(_) => None,
        })
    }

    pub fn push(&mut self, record: T) {
        self.entries.push(Entry::Record(record));
    }

    /// Keeps the records for which `keep` holds. Unparsed elements always stay.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        self.entries.retain(|entry| match entry {
            Entry::Record(record) => keep(record),
            Entry::Unparsed(_) => true,
        });
    }

    /// Number of stored elements, unparsed ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_records(self) -> Vec<T> {
        self.entries
            .into_iter()
            .filter_map(|entry| match entry {
                Entry::Record(record) => Some(record),
                Entry::Unparsed(_) => None,
            })
            .collect()
    }

    /// Overwrites the stored collection with every element, in order.
    pub fn save(&self, store: &dyn RecordStore) -> Result<(), StoreError> {
        save_records(store, &self.name, &self.entries)
    }
}

/// Loads a collection for display, defaulting to an empty list when it is
/// missing or unreadable. Elements that are not valid records are left out.
pub fn load_records<T: Serialize + DeserializeOwned>(store: &dyn RecordStore, collection: &str) -> Vec<T> {
    match Collection::load(store, collection) {
        Ok(records) => records.into_records(),
        Err(e) => {
            warn!(collection, error = %e, "Failed to read collection, using empty list");
            Vec::new()
        }
    }
}

/// Serializes `records` and overwrites the whole collection.
pub fn save_records<T: Serialize>(
    store: &dyn RecordStore,
    collection: &str,
    records: &[T],
) -> Result<(), StoreError> {
    let json = serde_json::to_string(records).map_err(|source| StoreError::Serialize {
        collection: collection.to_string(),
        source,
    })?;
    store.save(collection, json)?;
    debug!(collection, count = records.len(), "Collection saved");
    Ok(())
}
