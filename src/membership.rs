//! Tracks which keys are currently stored in a tree.
//!
//! Trees consult this list before touching their structure so that duplicate inserts and
//! deletes of absent keys are rejected up front. Keys are kept in the order they were
//! inserted; that order has no meaning for the tree itself but is what gets persisted.

use serde::{Deserialize, Serialize};

/// The keys present in a tree, in insertion order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresentKeys<K> {
    keys: Vec<K>,
}

impl<K> Default for PresentKeys<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> PresentKeys<K> {
    /// Generates a new, empty list.
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Number of keys present.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no keys are present.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates over the keys in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, K> {
        self.keys.iter()
    }

    /// The keys as a slice, in insertion order.
    pub fn as_slice(&self) -> &[K] {
        &self.keys
    }

    /// Appends `key`. Callers check [`contains`][Self::contains] first.
    pub(crate) fn push(&mut self, key: K) {
        self.keys.push(key);
    }
}

impl<K: PartialEq> PresentKeys<K> {
    /// Whether `key` is present.
    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    /// Removes `key`, returning whether it was present.
    pub(crate) fn remove(&mut self, key: &K) -> bool {
        match self.keys.iter().position(|k| k == key) {
            Some(pos) => {
                self.keys.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl<'a, K> IntoIterator for &'a PresentKeys<K> {
    type Item = &'a K;
    type IntoIter = std::slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
