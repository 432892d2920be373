//! Insertion-ordered counters and sums behind the report charts.

use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// String-keyed buckets that remember the order in which keys first appeared.
///
/// Serializes as a JSON object with keys in that order, ready for a chart's
/// label/value arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct Tally<V> {
    entries: Vec<(String, V)>,
    positions: HashMap<String, usize>,
}

impl<V> Default for Tally<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<V> Tally<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable access to `key`'s bucket, created with `V::default()` on first use.
    pub fn bucket(&mut self, key: &str) -> &mut V
    where
        V: Default,
    {
        let index = match self.positions.get(key) {
            Some(&index) => index,
            None => {
                self.entries.push((key.to_string(), V::default()));
                let index = self.entries.len() - 1;
                self.positions.insert(key.to_string(), index);
                index
            }
        };
        &mut self.entries[index].1
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.positions.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<V: Serialize> Serialize for Tally<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
