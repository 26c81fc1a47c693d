//! Paginated content window
//!
//! A [`PageWindow`] shows a collection a fixed number of items at a time,
//! with previous/next commands that wrap around at both ends.
//!
//! # Example
//!
//! ```rust
//! use edupilot_core::ItemCollection;
//! use edupilot_widgets::{PageButton, PageWindow};
//!
//! let catalog: ItemCollection<u32> = (0..40).collect();
//! let mut grid = PageWindow::new(catalog, 6).unwrap();
//! assert_eq!(grid.page_count(), 7);
//!
//! grid.go_to(3).unwrap();
//! let buttons = grid.page_buttons(5).unwrap();
//! assert_eq!(buttons[0], PageButton::Ellipsis);
//! assert_eq!(buttons[1], PageButton::Page { number: 2, current: false });
//! assert_eq!(grid.summary().to_string(), "Page 4 of 7 • Showing 6 of 40");
//! ```

use std::fmt;

use edupilot_core::{CyclerError, ItemCollection, Result};
use serde::Serialize;
use smallvec::SmallVec;
use tracing::{debug, warn};

/// Page number buttons for a pagination bar (inline for typical window sizes)
pub type PageButtons = SmallVec<[PageButton; 9]>;

/// Result of a navigation command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageMove {
    /// The cursor moved
    Moved { from: usize, to: usize },
    /// Nothing changed (single page, or already on the requested page)
    Unchanged,
}

impl PageMove {
    fn between(from: usize, to: usize) -> Self {
        if from == to {
            PageMove::Unchanged
        } else {
            PageMove::Moved { from, to }
        }
    }

    pub fn is_moved(&self) -> bool {
        matches!(self, PageMove::Moved { .. })
    }
}

/// One entry in a pagination bar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageButton {
    /// A 1-based page number
    Page { number: usize, current: bool },
    /// Skipped pages
    Ellipsis,
}

/// Position summary for a "Page X of Y" caption
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    /// 1-based page number
    pub page: usize,
    pub page_count: usize,
    /// Items on the current page
    pub showing: usize,
    /// Items in the whole collection
    pub total: usize,
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Page {} of {} • Showing {} of {}",
            self.page, self.page_count, self.showing, self.total
        )
    }
}

/// Stateful cursor producing fixed-size pages with wraparound
#[derive(Clone, Debug)]
pub struct PageWindow<T> {
    collection: ItemCollection<T>,
    page_size: usize,
    current_page: usize,
}

impl<T> PageWindow<T> {
    /// Create a window starting on the first page
    pub fn new(collection: ItemCollection<T>, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(CyclerError::config("page_size", "must be greater than zero"));
        }

        Ok(Self {
            collection,
            page_size,
            current_page: 0,
        })
    }

    /// Number of pages; an empty collection still has one (empty) page
    pub fn page_count(&self) -> usize {
        self.collection.len().div_ceil(self.page_size).max(1)
    }

    /// Move to the next page, wrapping from the last to the first
    pub fn advance(&mut self) -> PageMove {
        let from = self.current_page;
        self.current_page = (from + 1) % self.page_count();
        let step = PageMove::between(from, self.current_page);
        debug!(?step, "page advance");
        step
    }

    /// Move to the previous page, wrapping from the first to the last
    pub fn retreat(&mut self) -> PageMove {
        let from = self.current_page;
        let count = self.page_count();
        self.current_page = (from + count - 1) % count;
        let step = PageMove::between(from, self.current_page);
        debug!(?step, "page retreat");
        step
    }

    /// Jump to a 0-based page
    pub fn go_to(&mut self, page: usize) -> Result<PageMove> {
        let count = self.page_count();
        if page >= count {
            warn!(page, count, "rejected page jump");
            return Err(CyclerError::OutOfRange { index: page, len: count });
        }

        let from = self.current_page;
        self.current_page = page;
        Ok(PageMove::between(from, page))
    }

    /// Items on the current page, in display order
    pub fn visible_items(&self) -> &[T] {
        let start = self.current_page * self.page_size;
        self.collection.window(start..start + self.page_size)
    }

    /// Index of the first item on the current page
    pub fn page_start(&self) -> usize {
        self.current_page * self.page_size
    }

    /// Whether a "previous" button should be enabled
    ///
    /// [`retreat`](Self::retreat) still wraps; this only reflects whether the
    /// current page is the first one.
    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }

    /// Whether a "next" button should be enabled
    pub fn has_next(&self) -> bool {
        self.current_page + 1 < self.page_count()
    }

    /// Page number buttons, windowed around the current page
    ///
    /// At most `max_visible` numbers are produced; skipped ranges at either
    /// end are marked with [`PageButton::Ellipsis`].
    pub fn page_buttons(&self, max_visible: usize) -> Result<PageButtons> {
        if max_visible == 0 {
            return Err(CyclerError::config("page_buttons", "must be greater than zero"));
        }

        let total = self.page_count();
        let current = self.current_page + 1;
        let (start, end) = calculate_page_range(current, total, max_visible);

        let mut buttons = PageButtons::new();
        if start > 1 {
            buttons.push(PageButton::Ellipsis);
        }
        for number in start..=end {
            buttons.push(PageButton::Page {
                number,
                current: number == current,
            });
        }
        if end < total {
            buttons.push(PageButton::Ellipsis);
        }
        Ok(buttons)
    }

    pub fn summary(&self) -> PageSummary {
        PageSummary {
            page: self.current_page + 1,
            page_count: self.page_count(),
            showing: self.visible_items().len(),
            total: self.collection.len(),
        }
    }

    /// Replace the collection
    ///
    /// A size change is a reconstruction: the cursor is kept when still valid
    /// and otherwise moved to the new last page.
    pub fn set_collection(&mut self, collection: ItemCollection<T>) {
        let old_len = self.collection.len();
        self.collection = collection;
        let last = self.page_count() - 1;
        if self.current_page > last {
            debug!(
                old_len,
                new_len = self.collection.len(),
                page = last,
                "collection shrank, cursor clamped"
            );
            self.current_page = last;
        }
    }

    /// 0-based current page
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn collection(&self) -> &ItemCollection<T> {
        &self.collection
    }
}

/// Calculate the range of 1-based page numbers to display
fn calculate_page_range(current: usize, total: usize, visible: usize) -> (usize, usize) {
    if total <= visible {
        return (1, total);
    }

    let half = visible / 2;
    let start = if current <= half + 1 {
        1
    } else if current + half >= total {
        total - visible + 1
    } else {
        current - half
    };

    let end = (start + visible - 1).min(total);
    (start, end)
}
