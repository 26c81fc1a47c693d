//! Immutable ordered content snapshots
//!
//! An [`ItemCollection`] is the read-only input every windowed primitive works
//! over: course cards, testimonial rows, FAQ entries. Insertion order is
//! display order and the length is fixed for the lifetime of the value.
//! Cloning shares the underlying storage, so a view can hand the same snapshot
//! to several primitives without copying the items.

use std::ops::{Index, Range};
use std::sync::Arc;

use tracing::debug;

use crate::error::{CyclerError, Result};

/// Ordered, fixed-length, shared sequence of items
#[derive(Debug)]
pub struct ItemCollection<T> {
    items: Arc<[T]>,
}

impl<T> Clone for ItemCollection<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> ItemCollection<T> {
    /// Create a collection from owned items
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Arc::from(items),
        }
    }

    /// An empty collection
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`, if any
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterate items in display order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Items in `range`, with the upper bound clamped to the collection length
    ///
    /// A start beyond the end yields an empty slice rather than panicking.
    pub fn window(&self, range: Range<usize>) -> &[T] {
        let end = range.end.min(self.items.len());
        let start = range.start.min(end);
        &self.items[start..end]
    }

    /// Validate that `index` addresses an item
    pub fn check_index(&self, index: usize) -> Result<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            debug!(index, len = self.items.len(), "index rejected");
            Err(CyclerError::OutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }

    /// The collection concatenated with itself, paired with source indices
    ///
    /// Used for seamless looping rows: rendering `2N` items lets a sweep of one
    /// full pass never expose an empty gap at the wrap point.
    pub fn doubled(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.items.iter().enumerate().chain(self.items.iter().enumerate())
    }

    /// Whether two collections share the same storage
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl<T> Default for ItemCollection<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: PartialEq> PartialEq for ItemCollection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.items[..] == other.items[..]
    }
}

impl<T: Eq> Eq for ItemCollection<T> {}

impl<T> From<Vec<T>> for ItemCollection<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for ItemCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for ItemCollection<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a ItemCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_basics() {
        let items: ItemCollection<u32> = (0..5).collect();
        assert_eq!(items.len(), 5);
        assert!(!items.is_empty());
        assert_eq!(items[3], 3);
        assert_eq!(items.get(5), None);
    }

    #[test]
    fn test_window_clamps_to_length() {
        let items: ItemCollection<u32> = (0..5).collect();
        assert_eq!(items.window(0..2), &[0, 1]);
        assert_eq!(items.window(3..10), &[3, 4]);
        assert!(items.window(7..10).is_empty());
    }

    #[test]
    fn test_check_index() {
        let items = ItemCollection::from(vec!["a", "b"]);
        assert!(items.check_index(1).is_ok());
        assert_eq!(
            items.check_index(2),
            Err(CyclerError::OutOfRange { index: 2, len: 2 })
        );

        let empty: ItemCollection<&str> = ItemCollection::empty();
        assert!(empty.check_index(0).is_err());
    }

    #[test]
    fn test_doubled_keeps_source_indices() {
        let items = ItemCollection::from(vec!['x', 'y', 'z']);
        let doubled: Vec<_> = items.doubled().map(|(i, c)| (i, *c)).collect();
        assert_eq!(
            doubled,
            vec![(0, 'x'), (1, 'y'), (2, 'z'), (0, 'x'), (1, 'y'), (2, 'z')]
        );
    }

    #[test]
    fn test_clone_shares_storage() {
        let items = ItemCollection::from(vec![1, 2, 3]);
        let copy = items.clone();
        assert!(items.ptr_eq(&copy));
        assert!(!items.ptr_eq(&ItemCollection::from(vec![1, 2, 3])));
    }
}
