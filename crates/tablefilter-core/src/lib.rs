//! Headless column-filter model for HTML data tables
//!
//! This crate holds everything about live table filtering that does not need
//! a browser: which header columns get a filter, the per-table filter values,
//! and the predicate deciding which body rows stay visible.
//!
//! # Matching rules
//!
//! - A filter is **active** when its value is non-empty after trimming.
//! - With no active filter every row is visible and no cell is read.
//! - Otherwise a row is visible iff, for **every** active filter, the row's
//!   cell at that column (lowercased) contains the filter value (lowercased)
//!   as a substring.
//! - A row too short to have the filtered column is hidden while that filter
//!   is active.
//! - Columns labelled "Actions" / "Ações" never get a filter.
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[FilterSettings] --> B[TableFilterState]
//!     B --> C[FilterSlot]
//!     C --> D[ColumnFilter]
//!     C --> E[ExcludedColumn]
//!     B --> F[ActiveFilter]
//!     F --> G[RowCells]
//!     G --> H[RowVisibility]
//! ```
//!
//! # Example
//!
//! ```rust
//! use tablefilter_core::{FilterSettings, RowVisibility, TableFilterState};
//!
//! let mut state = TableFilterState::from_headers(
//!     ["Name", "Status", "Actions"],
//!     &FilterSettings::default(),
//! );
//! let rows = vec![
//!     vec!["Alice", "Active", "edit"],
//!     vec!["Bob", "Inactive", "edit"],
//! ];
//!
//! state.set_value(0, "ALI").unwrap();
//! assert_eq!(
//!     state.visibility(&rows),
//!     vec![RowVisibility::Visible, RowVisibility::Hidden],
//! );
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod error;
pub mod filtering;
pub mod matching;
pub mod settings;
pub mod state;

// Re-exports for convenience
pub use column::{ColumnFilter, ExcludedColumn, FilterSlot};
pub use error::{FilterError, Result};
pub use filtering::Filterable;
pub use matching::{
	ActiveFilter, FilterOutcome, RowCells, RowVisibility, compute_visibility, is_short_row,
	row_matches, row_visibility,
};
pub use settings::FilterSettings;
pub use state::TableFilterState;
