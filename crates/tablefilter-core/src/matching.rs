//! Pure row-matching predicate
//!
//! A row is visible iff, for every active filter, the row's cell at the
//! filter's column, lowercased, contains the filter's needle. Cells are looked
//! up through [`RowCells`], so the same predicate runs over `Vec<String>` rows
//! in tests and over live `<tr>` elements in the browser.

use std::borrow::Cow;

/// Positional access to the text of a row's cells
pub trait RowCells {
	/// Text content of the cell at `index`, or `None` if the row is too short
	fn cell_text(&self, index: usize) -> Option<Cow<'_, str>>;
}

impl<S: AsRef<str>> RowCells for [S] {
	fn cell_text(&self, index: usize) -> Option<Cow<'_, str>> {
		self.get(index).map(|cell| Cow::Borrowed(cell.as_ref()))
	}
}

impl<S: AsRef<str>> RowCells for Vec<S> {
	fn cell_text(&self, index: usize) -> Option<Cow<'_, str>> {
		self.as_slice().cell_text(index)
	}
}

impl<S: AsRef<str>, const N: usize> RowCells for [S; N] {
	fn cell_text(&self, index: usize) -> Option<Cow<'_, str>> {
		self.as_slice().cell_text(index)
	}
}

impl<T: RowCells + ?Sized> RowCells for &T {
	fn cell_text(&self, index: usize) -> Option<Cow<'_, str>> {
		(**self).cell_text(index)
	}
}

/// A filter with a non-empty value, ready for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFilter {
	column_index: usize,
	needle: String,
}

impl ActiveFilter {
	/// Builds an active filter from a raw value.
	///
	/// Returns `None` when the value is blank. The needle is the lowercased
	/// value without trimming, so inner and trailing spaces still count.
	pub fn new(column_index: usize, value: &str) -> Option<Self> {
		if value.trim().is_empty() {
			return None;
		}
		Some(Self {
			column_index,
			needle: value.to_lowercase(),
		})
	}

	/// Column the filter applies to
	pub fn column_index(&self) -> usize {
		self.column_index
	}

	/// Lowercased search text
	pub fn needle(&self) -> &str {
		&self.needle
	}

	/// Returns true if the row's cell contains the needle.
	///
	/// A missing cell never matches.
	pub fn matches<R: RowCells + ?Sized>(&self, row: &R) -> bool {
		row.cell_text(self.column_index)
			.is_some_and(|text| text.to_lowercase().contains(&self.needle))
	}
}

/// Returns true if the row lacks a cell for any of the filtered columns
pub fn is_short_row<R: RowCells + ?Sized>(filters: &[ActiveFilter], row: &R) -> bool {
	filters
		.iter()
		.any(|filter| row.cell_text(filter.column_index).is_none())
}

/// Conjunction of all filters over one row
pub fn row_matches<R: RowCells + ?Sized>(filters: &[ActiveFilter], row: &R) -> bool {
	filters.iter().all(|filter| filter.matches(row))
}

/// Derived display state of a body row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowVisibility {
	/// Row is shown
	Visible,
	/// Row is hidden
	Hidden,
}

impl RowVisibility {
	/// Value for the row's `style.display` property
	pub fn display_value(self) -> &'static str {
		match self {
			Self::Visible => "",
			Self::Hidden => "none",
		}
	}

	/// Returns true for [`RowVisibility::Visible`]
	pub fn is_visible(self) -> bool {
		matches!(self, Self::Visible)
	}
}

impl From<bool> for RowVisibility {
	fn from(visible: bool) -> Self {
		if visible { Self::Visible } else { Self::Hidden }
	}
}

/// Visibility of a single row under a set of active filters.
///
/// With no active filters the row is not inspected at all.
pub fn row_visibility<R: RowCells + ?Sized>(filters: &[ActiveFilter], row: &R) -> RowVisibility {
	if filters.is_empty() {
		return RowVisibility::Visible;
	}
	row_matches(filters, row).into()
}

/// Visibility of every row, in order
pub fn compute_visibility<I>(filters: &[ActiveFilter], rows: I) -> Vec<RowVisibility>
where
	I: IntoIterator,
	I::Item: RowCells,
{
	rows.into_iter()
		.map(|row| row_visibility(filters, &row))
		.collect()
}

/// Row counts produced by one filtering pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOutcome {
	/// Rows left visible
	pub visible: usize,
	/// Rows hidden
	pub hidden: usize,
	/// Hidden rows that had no cell for some filtered column
	pub short_rows: usize,
}

impl FilterOutcome {
	/// Total number of rows visited
	pub fn total(&self) -> usize {
		self.visible + self.hidden
	}

	pub(crate) fn record(&mut self, visibility: RowVisibility) {
		match visibility {
			RowVisibility::Visible => self.visible += 1,
			RowVisibility::Hidden => self.hidden += 1,
		}
	}
}
