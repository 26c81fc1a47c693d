//! Exclusive accordion state
//!
//! A set of collapsible entries where at most one is open. Opening an entry
//! closes whichever entry was open before; toggling the open entry closes it.
//! This is the FAQ list behaviour.

use edupilot_core::{ItemCollection, Result};
use tracing::debug;

/// Selection holding at most one open index
#[derive(Clone, Debug)]
pub struct ExclusiveToggleSet<T> {
    collection: ItemCollection<T>,
    open: Option<usize>,
}

impl<T> ExclusiveToggleSet<T> {
    /// Create with every entry closed
    pub fn new(collection: ItemCollection<T>) -> Self {
        Self {
            collection,
            open: None,
        }
    }

    /// Flip entry `index`
    ///
    /// Returns whether the entry is open afterwards.
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        self.collection.check_index(index)?;

        let previous = self.open;
        self.open = if previous == Some(index) {
            None
        } else {
            Some(index)
        };
        debug!(?previous, open = ?self.open, "accordion toggled");
        Ok(self.open.is_some())
    }

    pub fn is_open(&self, index: usize) -> Result<bool> {
        self.collection.check_index(index)?;
        Ok(self.open == Some(index))
    }

    /// The open entry's index, or `None` when everything is closed
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// The open entry, if any
    pub fn open_item(&self) -> Option<&T> {
        self.open.and_then(|i| self.collection.get(i))
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }

    pub fn collection(&self) -> &ItemCollection<T> {
        &self.collection
    }

    /// Entries paired with their open flag, in display order
    pub fn entries(&self) -> impl Iterator<Item = (&T, bool)> + '_ {
        self.collection
            .iter()
            .enumerate()
            .map(move |(i, item)| (item, self.open == Some(i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edupilot_core::CyclerError;

    fn faq(n: usize) -> ExclusiveToggleSet<usize> {
        ExclusiveToggleSet::new((0..n).collect())
    }

    #[test]
    fn test_faq_scenario() {
        let mut set = faq(8);

        assert_eq!(set.toggle(3), Ok(true));
        assert!(set.is_open(3).unwrap());

        set.toggle(5).unwrap();
        assert!(!set.is_open(3).unwrap());
        assert!(set.is_open(5).unwrap());

        assert_eq!(set.toggle(5), Ok(false));
        assert!(!set.is_open(5).unwrap());
        assert_eq!(set.open_index(), None);
    }

    #[test]
    fn test_toggle_is_involution() {
        for i in 0..4 {
            for start in [None, Some(0), Some(2)] {
                let mut set = faq(4);
                if let Some(s) = start {
                    set.toggle(s).unwrap();
                }
                let before = set.open_index();

                set.toggle(i).unwrap();
                if before == Some(i) {
                    assert_eq!(set.open_index(), None);
                } else {
                    set.toggle(i).unwrap();
                    assert_eq!(set.open_index(), None);
                }
            }
        }

        let mut set = faq(4);
        set.toggle(1).unwrap();
        set.toggle(1).unwrap();
        assert_eq!(set.open_index(), None);
    }

    #[test]
    fn test_exclusivity() {
        let mut set = faq(6);
        for i in 0..6 {
            for j in 0..6 {
                if i == j {
                    continue;
                }
                set.close_all();
                set.toggle(i).unwrap();
                set.toggle(j).unwrap();
                assert!(!set.is_open(i).unwrap());
                assert!(set.is_open(j).unwrap());
                assert_eq!(set.entries().filter(|(_, open)| *open).count(), 1);
            }
        }
    }

    #[test]
    fn test_out_of_range_leaves_state() {
        let mut set = faq(3);
        set.toggle(1).unwrap();

        assert_eq!(
            set.toggle(3),
            Err(CyclerError::OutOfRange { index: 3, len: 3 })
        );
        assert!(set.is_open(7).is_err());
        assert_eq!(set.open_index(), Some(1));
        assert_eq!(set.open_item(), Some(&1));
    }
}
