//! Soft-reference resolution.
//!
//! Records point at each other by id with no existence guarantee. A
//! [`RecordIndex`] is built once per render or report and answers lookups in
//! constant time; a dangling id resolves to [`UNKNOWN_LABEL`].

use std::collections::HashMap;

/// Label shown wherever a referenced record no longer exists.
pub const UNKNOWN_LABEL: &str = "Desconhecido";

/// Id → record index over a borrowed collection. When ids repeat, the first
/// record wins, matching a front-to-back scan.
#[derive(Debug)]
pub struct RecordIndex<'a, T> {
    by_id: HashMap<&'a str, &'a T>,
}

impl<'a, T> RecordIndex<'a, T> {
    pub fn new(records: &'a [T], id: impl Fn(&'a T) -> &'a str) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        for record in records {
            by_id.entry(id(record)).or_insert(record);
        }
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a T> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Resolves `id` to a label, or [`UNKNOWN_LABEL`] when it dangles.
    pub fn label_or_unknown(&self, id: &str, label: impl Fn(&'a T) -> &'a str) -> &'a str {
        self.get(id).map(label).unwrap_or(UNKNOWN_LABEL)
    }
}
