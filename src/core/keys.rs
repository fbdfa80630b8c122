//! Ordered, deduplicated collection of dotted key-paths.

use std::collections::HashSet;

use serde::{Serialize, Serializer};

/// An ordered set of dotted key-paths (e.g. `"Common.submit"`).
///
/// Keys keep their first-insertion order. Inserting a key that is already
/// present is a no-op, so the collection never contains duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPaths {
    keys: Vec<String>,
    index: HashSet<String>,
}

impl KeyPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key, returning `true` if it was not present before.
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.index.contains(&key) {
            return false;
        }
        self.index.insert(key.clone());
        self.keys.push(key);
        true
    }

    /// Union `other` into `self`, appending unseen keys in `other`'s order.
    pub fn union(mut self, other: KeyPaths) -> Self {
        self.extend(other.keys);
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.keys
    }

    pub fn into_vec(self) -> Vec<String> {
        self.keys
    }
}

impl<S: Into<String>> Extend<S> for KeyPaths {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for KeyPaths {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut keys = KeyPaths::new();
        keys.extend(iter);
        keys
    }
}

impl IntoIterator for KeyPaths {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter()
    }
}

impl Serialize for KeyPaths {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.keys)
    }
}
