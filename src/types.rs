//! Core record types.
//!
//! Key/value records live in a [`RecordSet`], an ordered list of pairs that keeps insertion order
//! (the same order a caller would observe iterating an insertion-ordered map). Text records are
//! plain `String` lines and need no wrapper.

use serde::{Deserialize, Serialize};

/// An element annotated with the boolean result of a predicate: `(predicate(element), element)`.
pub type Tagged<T> = (bool, T);

/// Ordered in-memory collection of key/value records.
///
/// Keys are not required to be unique; uniqueness is a property of whatever container the
/// records came from, not of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet<K = String, V = i64> {
    /// Records in insertion order.
    pub records: Vec<(K, V)>,
}

impl<K, V> RecordSet<K, V> {
    /// Create a record set from pairs, keeping their order.
    pub fn new(records: Vec<(K, V)>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record at the end.
    pub fn push(&mut self, key: K, value: V) {
        self.records.push((key, value));
    }

    /// Iterate records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, (K, V)> {
        self.records.iter()
    }

    /// Iterate keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.records.iter().map(|(k, _)| k)
    }

    /// Returns the value of the first record whose key equals `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.records.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

impl<K: Clone, V: Clone> RecordSet<K, V> {
    /// Create a new record set containing only records whose value matches `predicate`.
    ///
    /// Order is preserved and `self` is left untouched.
    pub fn filter_by_value<F>(&self, predicate: F) -> Self
    where
        F: FnMut(&V) -> bool,
    {
        Self::new(crate::processing::filter_project(&self.records, predicate))
    }

    /// Tag every record with `predicate(&(key, value))`.
    pub fn tag_by<F>(&self, predicate: F) -> Vec<Tagged<(K, V)>>
    where
        F: FnMut(&(K, V)) -> bool,
    {
        crate::processing::tag_by_predicate(&self.records, predicate)
    }
}

impl<K, V> Default for RecordSet<K, V> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<K, V> FromIterator<(K, V)> for RecordSet<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<K, V> IntoIterator for RecordSet<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a RecordSet<K, V> {
    type Item = &'a (K, V);
    type IntoIter = std::slice::Iter<'a, (K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
