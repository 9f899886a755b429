//! Headless filter model
//!
//! Settings, per-table filter state, and the row-matching predicate. Usable
//! on any target, without a document.
//!
//! # Examples
//!
//! ```rust
//! use tablefilter::model::{ActiveFilter, row_matches};
//!
//! let filters = [ActiveFilter::new(0, "ali").unwrap()];
//! assert!(row_matches(&filters, &["Alice"]));
//! ```

pub use tablefilter_core::*;
