//! Filtering functionality for tables

use crate::error::Result;

/// Trait for filterable tables
pub trait Filterable {
	/// Sets the filter value of a column
	fn filter_by(&mut self, column_index: usize, value: &str) -> Result<()>;

	/// Clears all filters
	fn clear_filters(&mut self);

	/// Returns the active filters as `(column_index, raw value)` pairs
	fn current_filters(&self) -> Vec<(usize, String)>;
}
