//! Per-table filter state
//!
//! Each filterable table owns one [`TableFilterState`]. It holds a slot per
//! header column and is the only place filter values live; the DOM inputs
//! write into it and filtering reads from it.

use crate::column::{ColumnFilter, FilterSlot};
use crate::error::{FilterError, Result};
use crate::filtering::Filterable;
use crate::matching::{
	ActiveFilter, FilterOutcome, RowCells, RowVisibility, is_short_row, row_visibility,
};
use crate::settings::FilterSettings;

/// Filter values of one table, indexed by column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableFilterState {
	slots: Vec<FilterSlot>,
}

impl TableFilterState {
	/// Builds one slot per header cell, in order
	///
	/// # Example
	///
	/// ```rust
	/// use tablefilter_core::{FilterSettings, TableFilterState};
	///
	/// let state = TableFilterState::from_headers(
	///     ["Name", "Status", "Actions"],
	///     &FilterSettings::default(),
	/// );
	/// assert_eq!(state.column_count(), 3);
	/// assert_eq!(state.filters().count(), 2);
	/// ```
	pub fn from_headers<I, S>(headers: I, settings: &FilterSettings) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let slots = headers
			.into_iter()
			.enumerate()
			.map(|(index, header)| FilterSlot::from_header(index, header.as_ref(), settings))
			.collect();
		Self { slots }
	}

	/// All slots, positionally aligned with the header
	pub fn slots(&self) -> &[FilterSlot] {
		&self.slots
	}

	/// Number of header columns
	pub fn column_count(&self) -> usize {
		self.slots.len()
	}

	/// Filterable (non-excluded) columns
	pub fn filters(&self) -> impl Iterator<Item = &ColumnFilter> {
		self.slots.iter().filter_map(FilterSlot::as_filter)
	}

	/// Current raw value of a column's filter
	pub fn value(&self, column_index: usize) -> Option<&str> {
		self.slots
			.get(column_index)
			.and_then(FilterSlot::as_filter)
			.map(ColumnFilter::current_value)
	}

	/// Sets a column's filter value
	pub fn set_value(&mut self, column_index: usize, value: impl Into<String>) -> Result<()> {
		let columns = self.slots.len();
		let slot = self
			.slots
			.get_mut(column_index)
			.ok_or(FilterError::ColumnOutOfRange {
				index: column_index,
				columns,
			})?;
		let filter = slot
			.as_filter_mut()
			.ok_or(FilterError::ExcludedColumn(column_index))?;
		filter.set_value(value);
		Ok(())
	}

	/// Resets every filter value to empty
	pub fn clear(&mut self) {
		for slot in &mut self.slots {
			if let Some(filter) = slot.as_filter_mut() {
				filter.set_value(String::new());
			}
		}
	}

	/// Filters with a non-blank value
	pub fn active_filters(&self) -> Vec<ActiveFilter> {
		self.filters()
			.filter_map(|filter| ActiveFilter::new(filter.column_index(), filter.current_value()))
			.collect()
	}

	/// Returns true if any filter is active
	pub fn has_active_filters(&self) -> bool {
		self.filters().any(ColumnFilter::is_active)
	}

	/// Visibility of every row under the current filters
	pub fn visibility<I>(&self, rows: I) -> Vec<RowVisibility>
	where
		I: IntoIterator,
		I::Item: RowCells,
	{
		let active = self.active_filters();
		rows.into_iter()
			.map(|row| row_visibility(&active, &row))
			.collect()
	}

	/// Runs one filtering pass, handing each row and its visibility to `apply`
	pub fn apply<I, F>(&self, rows: I, mut apply: F) -> FilterOutcome
	where
		I: IntoIterator,
		I::Item: RowCells,
		F: FnMut(&I::Item, RowVisibility),
	{
		let active = self.active_filters();
		let mut outcome = FilterOutcome::default();
		for row in rows {
			let visibility = row_visibility(&active, &row);
			if !visibility.is_visible() && is_short_row(&active, &row) {
				outcome.short_rows += 1;
			}
			apply(&row, visibility);
			outcome.record(visibility);
		}
		if outcome.short_rows > 0 {
			tracing::warn!(
				short_rows = outcome.short_rows,
				"rows have no cell for a filtered column, excluding them"
			);
		}
		tracing::debug!(
			active_filters = active.len(),
			visible = outcome.visible,
			hidden = outcome.hidden,
			"filtered table rows"
		);
		outcome
	}
}

impl Filterable for TableFilterState {
	fn filter_by(&mut self, column_index: usize, value: &str) -> Result<()> {
		self.set_value(column_index, value)
	}

	fn clear_filters(&mut self) {
		self.clear();
	}

	fn current_filters(&self) -> Vec<(usize, String)> {
		self.filters()
			.filter(|filter| filter.is_active())
			.map(|filter| (filter.column_index(), filter.current_value().to_string()))
			.collect()
	}
}
