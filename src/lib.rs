//! # tablefilter
//!
//! Live per-column filters for HTML data tables.
//!
//! Mark a table with `class="filterable"` and call `dom::install` (or
//! `setupTableFilters()` from JavaScript). Each table gets a second header row
//! of text inputs, one per column except "Actions"/"Ações", and a
//! "Limpar Filtros" button in front of it. Typing hides every body row whose
//! cells do not contain all of the typed values.
//!
//! ## Crates
//!
//! - [`model`]: headless filter state and matching predicate (`tablefilter-core`)
//! - [`dom`]: browser binding built on web-sys (`tablefilter-dom`, `dom` feature)
//!
//! ## Feature Flags
//!
//! - `dom` (default) - Browser binding
//! - `console_error_panic_hook` - Readable panics in the browser console
//! - `debug-hooks` - Per-keystroke console logging in debug builds
//!
//! ## Example
//!
//! ```rust
//! use tablefilter::prelude::*;
//!
//! let mut state = TableFilterState::from_headers(
//!     ["Name", "Status", "Actions"],
//!     &FilterSettings::default(),
//! );
//! state.filter_by(0, "a").unwrap();
//! state.filter_by(1, "active").unwrap();
//!
//! let rows = [["Alice", "Active", ""], ["Bob", "Inactive", ""]];
//! assert_eq!(
//!     state.visibility(&rows),
//!     vec![RowVisibility::Visible, RowVisibility::Hidden],
//! );
//! ```

pub mod model;

#[cfg(feature = "dom")]
pub mod dom;

pub use tablefilter_core::{FilterError, FilterSettings, Result, TableFilterState};

/// Commonly used types
pub mod prelude {
	pub use tablefilter_core::{
		ActiveFilter, FilterError, FilterOutcome, FilterSettings, FilterSlot, Filterable,
		RowCells, RowVisibility, TableFilterState,
	};
}
