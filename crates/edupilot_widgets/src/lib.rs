//! EduPilot Widgets
//!
//! Interaction state for the site's widgets, independent of any renderer.
//!
//! # Widgets
//!
//! - [`PageWindow`]: fixed-size pages over a collection with wraparound
//! - [`ExclusiveToggleSet`]: accordion where opening one entry closes the rest
//! - [`Disclosure`]: a single open/closed panel
//! - [`NavBar`]: route pills, mobile menu and scroll-dimming
//! - [`ChatWidget`]: floating chat panel with a local transcript
//! - [`TodoList`]: checklist with completion toggles
//!
//! # Example
//!
//! ```rust
//! use edupilot_core::ItemCollection;
//! use edupilot_widgets::{ExclusiveToggleSet, PageWindow};
//!
//! let courses: ItemCollection<u32> = (1..=12).collect();
//! let mut grid = PageWindow::new(courses, 6).unwrap();
//! assert_eq!(grid.visible_items(), &[1, 2, 3, 4, 5, 6]);
//! grid.advance();
//! assert_eq!(grid.visible_items(), &[7, 8, 9, 10, 11, 12]);
//!
//! let faqs: ItemCollection<&str> = vec!["q1", "q2", "q3"].into();
//! let mut faq = ExclusiveToggleSet::new(faqs);
//! faq.toggle(1).unwrap();
//! assert!(faq.is_open(1).unwrap());
//! ```

pub mod accordion;
pub mod chat;
pub mod disclosure;
pub mod navigation;
pub mod pagination;
pub mod todo;

pub use accordion::ExclusiveToggleSet;
pub use chat::{ChatAuthor, ChatMessage, ChatWidget};
pub use disclosure::Disclosure;
pub use navigation::{NavBar, NavItem, NavRequest, Route, DEFAULT_SCROLL_THRESHOLD_PX};
pub use pagination::{PageButton, PageButtons, PageMove, PageSummary, PageWindow};
pub use todo::{TodoItem, TodoList};
