//! Reading filterable tables out of the DOM
//!
//! A filterable table must have a `<thead>` whose `<th>` cells name the
//! columns and a `<tbody>` holding the data rows.

use std::borrow::Cow;
use std::cell::OnceCell;

use tablefilter_core::{FilterError, RowCells, RowVisibility};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node};

use crate::dom::{js_error, query_all};
use crate::error_log;

/// A table element split into the sections the widget works on
#[derive(Debug, Clone)]
pub struct TableSections {
	table: Element,
	thead: Element,
	tbody: Element,
	parent: Node,
}

impl TableSections {
	/// Locates `<thead>`, `<tbody>`, and the parent node of `table`
	pub fn from_table(table: Element) -> Result<Self, FilterError> {
		let thead = table
			.query_selector("thead")
			.map_err(js_error)?
			.ok_or(FilterError::MissingSection("thead"))?;
		let tbody = table
			.query_selector("tbody")
			.map_err(js_error)?
			.ok_or(FilterError::MissingSection("tbody"))?;
		let parent = table.parent_node().ok_or(FilterError::Detached)?;

		Ok(Self {
			table,
			thead,
			tbody,
			parent,
		})
	}

	/// The `<table>` element
	pub fn table(&self) -> &Element {
		&self.table
	}

	/// The `<thead>` element
	pub fn thead(&self) -> &Element {
		&self.thead
	}

	/// Node the clear button is inserted into
	pub fn parent(&self) -> &Node {
		&self.parent
	}

	/// Text of every header cell, in column order
	pub fn header_labels(&self) -> Result<Vec<String>, FilterError> {
		Ok(query_all(&self.thead, "th")?
			.iter()
			.map(|th| th.text_content().unwrap_or_default())
			.collect())
	}

	/// Current body rows
	pub fn body_rows(&self) -> Result<Vec<DomRow>, FilterError> {
		Ok(query_all(&self.tbody, "tr")?
			.into_iter()
			.map(DomRow::new)
			.collect())
	}
}

/// A `<tr>` adapted to [`RowCells`]
///
/// Cells are queried on first lookup, so rows are not touched while no
/// filter is active.
#[derive(Debug)]
pub struct DomRow {
	element: Element,
	cells: OnceCell<Vec<Element>>,
}

impl DomRow {
	/// Wraps a row element
	pub fn new(element: Element) -> Self {
		Self {
			element,
			cells: OnceCell::new(),
		}
	}

	/// The `<tr>` element
	pub fn element(&self) -> &Element {
		&self.element
	}

	fn cells(&self) -> &[Element] {
		self.cells.get_or_init(|| {
			query_all(&self.element, "td").unwrap_or_else(|err| {
				error_log!("failed to read row cells: {}", err);
				Vec::new()
			})
		})
	}

	/// Applies a visibility through the row's `style.display`
	pub fn set_visibility(&self, visibility: RowVisibility) -> Result<(), FilterError> {
		let row = self
			.element
			.dyn_ref::<HtmlElement>()
			.ok_or_else(|| FilterError::Dom("row is not an HTML element".to_string()))?;
		row.style()
			.set_property("display", visibility.display_value())
			.map_err(js_error)
	}
}

impl RowCells for DomRow {
	fn cell_text(&self, index: usize) -> Option<Cow<'_, str>> {
		self.cells()
			.get(index)
			.map(|cell| Cow::Owned(cell.text_content().unwrap_or_default()))
	}
}
