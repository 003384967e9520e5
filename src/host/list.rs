//! Ordered list with a membership index.

use std::collections::HashSet;

/// Items identified by a string key (a URL, a mount path).
pub trait Keyed {
    /// Identity key used for duplicate detection.
    fn key(&self) -> &str;
}

impl Keyed for String {
    fn key(&self) -> &str {
        self
    }
}

/// An ordered list that also tracks which keys it contains.
///
/// Membership checks are O(1) regardless of list length. Items are never
/// removed, so the index never goes stale.
#[derive(Debug, Clone)]
pub struct KeyedList<T> {
    items: Vec<T>,
    index: HashSet<String>,
}

impl<T> Default for KeyedList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashSet::new(),
        }
    }
}

impl<T: Keyed> KeyedList<T> {
    /// Empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an item with `key` is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains(key)
    }

    /// Append unconditionally (duplicates allowed).
    pub fn push(&mut self, item: T) {
        self.index.insert(item.key().to_string());
        self.items.push(item);
    }

    /// Append unless the key is already present. Returns whether it was added.
    pub fn push_unique(&mut self, item: T) -> bool {
        if self.contains(item.key()) {
            return false;
        }
        self.push(item);
        true
    }

    /// Insert at the front unless the key is already present.
    pub fn insert_front_unique(&mut self, item: T) -> bool {
        if self.contains(item.key()) {
            return false;
        }
        self.index.insert(item.key().to_string());
        self.items.insert(0, item);
        true
    }

    /// Items in order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Number of items, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T: Keyed> IntoIterator for &'a KeyedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
