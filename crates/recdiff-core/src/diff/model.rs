//! Diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! The change mapping uses `BTreeMap` for deterministic serialization.

use crate::record::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Old/new values recorded for one changed field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Change {
    /// Value read from the old instance
    pub old: FieldValue,
    /// Value read from the new instance
    pub new: FieldValue,
}

/// The field-name-to-change mapping produced by one diff call.
///
/// Contains an entry only for fields whose values differ under the
/// comparison policy; each field contributes at most one entry. A change
/// set is created fresh per diff call and owned solely by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChangeSet {
    changes: BTreeMap<String, Change>,
}

impl ChangeSet {
    /// Create an empty change set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a change for a field
    pub(crate) fn insert(&mut self, field_name: String, change: Change) {
        self.changes.insert(field_name, change);
    }

    /// Get the change recorded for a field, if any
    pub fn get(&self, field_name: &str) -> Option<&Change> {
        self.changes.get(field_name)
    }

    /// Check whether a field changed
    pub fn contains_field(&self, field_name: &str) -> bool {
        self.changes.contains_key(field_name)
    }

    /// Number of changed fields
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Check if no field changed
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Iterate over (field name, change) pairs in field-name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Change)> {
        self.changes.iter()
    }

    /// Names of the changed fields, in order
    pub fn field_names(&self) -> impl Iterator<Item = &String> {
        self.changes.keys()
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = (&'a String, &'a Change);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}
