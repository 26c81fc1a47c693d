//! EduPilot Core
//!
//! Foundational types shared by every EduPilot UI state primitive:
//!
//! - **Item Collections**: immutable, cheaply shared, ordered content snapshots
//! - **Errors**: the validation taxonomy every primitive reports through
//! - **Direction**: travel direction for cyclic motion
//!
//! # Example
//!
//! ```rust
//! use edupilot_core::{CyclerError, ItemCollection};
//!
//! let faqs = ItemCollection::from(vec!["How do I start?", "Is there a refund?"]);
//! assert_eq!(faqs.len(), 2);
//! assert_eq!(faqs.get(1), Some(&"Is there a refund?"));
//!
//! let err = faqs.check_index(5).unwrap_err();
//! assert_eq!(err, CyclerError::OutOfRange { index: 5, len: 2 });
//! ```

pub mod collection;
pub mod direction;
pub mod error;

pub use collection::ItemCollection;
pub use direction::Direction;
pub use error::{CyclerError, Result};
