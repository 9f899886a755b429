//! Filter slots, one per header column

use crate::settings::FilterSettings;

/// A filterable column and its current free-text value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFilter {
	column_index: usize,
	label: String,
	current_value: String,
}

impl ColumnFilter {
	/// Creates an empty filter for the given column
	pub fn new(column_index: usize, label: impl Into<String>) -> Self {
		Self {
			column_index,
			label: label.into(),
			current_value: String::new(),
		}
	}

	/// 0-based position of the column in the header
	pub fn column_index(&self) -> usize {
		self.column_index
	}

	/// Header label the filter was built from
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Raw value as typed by the user
	pub fn current_value(&self) -> &str {
		&self.current_value
	}

	/// Replaces the current value
	pub fn set_value(&mut self, value: impl Into<String>) {
		self.current_value = value.into();
	}

	/// A filter is active when its value is non-empty after trimming
	pub fn is_active(&self) -> bool {
		!self.current_value.trim().is_empty()
	}
}

/// A column that never receives a filter control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludedColumn {
	column_index: usize,
	label: String,
}

impl ExcludedColumn {
	/// Creates an excluded column marker
	pub fn new(column_index: usize, label: impl Into<String>) -> Self {
		Self {
			column_index,
			label: label.into(),
		}
	}

	/// 0-based position of the column in the header
	pub fn column_index(&self) -> usize {
		self.column_index
	}

	/// Header label
	pub fn label(&self) -> &str {
		&self.label
	}
}

/// One positional slot in a table's filter row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSlot {
	/// Column with a text filter
	Filter(ColumnFilter),
	/// Inert column (e.g. "Actions")
	Excluded(ExcludedColumn),
}

impl FilterSlot {
	/// Classifies a header cell by its text
	pub fn from_header(column_index: usize, header_text: &str, settings: &FilterSettings) -> Self {
		let label = header_text.trim();
		if settings.is_excluded_label(label) {
			Self::Excluded(ExcludedColumn::new(column_index, label))
		} else {
			Self::Filter(ColumnFilter::new(column_index, label))
		}
	}

	/// 0-based position of the column in the header
	pub fn column_index(&self) -> usize {
		match self {
			Self::Filter(filter) => filter.column_index(),
			Self::Excluded(excluded) => excluded.column_index(),
		}
	}

	/// Header label
	pub fn label(&self) -> &str {
		match self {
			Self::Filter(filter) => filter.label(),
			Self::Excluded(excluded) => excluded.label(),
		}
	}

	/// Returns the filter, or `None` for an excluded slot
	pub fn as_filter(&self) -> Option<&ColumnFilter> {
		match self {
			Self::Filter(filter) => Some(filter),
			Self::Excluded(_) => None,
		}
	}

	/// Mutable access to the filter, or `None` for an excluded slot
	pub fn as_filter_mut(&mut self) -> Option<&mut ColumnFilter> {
		match self {
			Self::Filter(filter) => Some(filter),
			Self::Excluded(_) => None,
		}
	}

	/// Returns true for excluded slots
	pub fn is_excluded(&self) -> bool {
		matches!(self, Self::Excluded(_))
	}
}
