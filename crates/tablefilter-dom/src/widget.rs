//! The table filter widget
//!
//! ## Architecture
//!
//! ```text
//! <button>Limpar Filtros</button>     ← inserted before the table
//! <table class="filterable">
//!   <thead>
//!     <tr><th>Name</th><th>Status</th><th>Actions</th></tr>
//!     <tr class="filter-row">          ← appended by the widget
//!       <td><input data-index="0"></td>
//!       <td><input data-index="1"></td>
//!       <td></td>                      ← excluded column
//!     </tr>
//!   </thead>
//!   <tbody> ... </tbody>
//! </table>
//!
//! input event ─▶ TableFilterState::set_value ─▶ filter_table ─▶ tr.style.display
//! ```
//!
//! The widget owns the filter state, the listeners and the inserted elements.
//! Dropping it detaches the listeners, removes the filter row and clear
//! button, unmarks the table and shows every row again, so a later
//! [`setup_table_filters`](crate::setup_table_filters) can attach afresh.

use std::cell::RefCell;
use std::rc::Rc;

use tablefilter_core::{
	FilterError, FilterOutcome, FilterSettings, FilterSlot, Filterable, RowVisibility,
	TableFilterState,
};
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement, Node};

use crate::dom::{create, js_error};
use crate::listener::ListenerHandle;
use crate::table::TableSections;
use crate::{debug_log, error_log, warn_log};

/// Attribute marking a table that already has filters
pub const INITIALIZED_ATTRIBUTE: &str = "data-filters-initialized";

struct WidgetInner {
	sections: TableSections,
	state: RefCell<TableFilterState>,
	inputs: Vec<(usize, HtmlInputElement)>,
	filter_row: Element,
	clear_button: HtmlButtonElement,
}

impl WidgetInner {
	fn filter_table(&self) -> FilterOutcome {
		let rows = match self.sections.body_rows() {
			Ok(rows) => rows,
			Err(err) => {
				error_log!("failed to read table body: {}", err);
				return FilterOutcome::default();
			}
		};

		let outcome = self.state.borrow().apply(rows, |row, visibility| {
			if let Err(err) = row.set_visibility(visibility) {
				error_log!("failed to update row display: {}", err);
			}
		});
		if outcome.short_rows > 0 {
			warn_log!(
				"{} rows have no cell for a filtered column and were hidden",
				outcome.short_rows
			);
		}
		debug_log!(
			"{} of {} rows visible",
			outcome.visible,
			outcome.total()
		);
		outcome
	}

	fn set_value(&self, column_index: usize, value: &str) -> Result<(), FilterError> {
		self.state.borrow_mut().set_value(column_index, value)
	}

	fn clear(&self) -> FilterOutcome {
		for (_, input) in &self.inputs {
			input.set_value("");
		}
		self.state.borrow_mut().clear();
		self.filter_table()
	}

	fn remove_from_page(&self) {
		self.filter_row.remove();
		self.clear_button.remove();
		if let Err(err) = self.sections.table().remove_attribute(INITIALIZED_ATTRIBUTE) {
			error_log!("failed to unmark table: {:?}", err);
		}

		match self.sections.body_rows() {
			Ok(rows) => {
				for row in rows {
					if let Err(err) = row.set_visibility(RowVisibility::Visible) {
						error_log!("failed to restore row display: {}", err);
					}
				}
			}
			Err(err) => error_log!("failed to read table body: {}", err),
		}
	}
}

/// Live column filters attached to one table
pub struct TableFilterWidget {
	inner: Rc<WidgetInner>,
	listeners: Vec<ListenerHandle>,
}

impl TableFilterWidget {
	/// Builds the filter row and clear button for `table` and wires them up
	///
	/// # Errors
	///
	/// Fails if the table has no `<thead>` / `<tbody>`, has no parent node,
	/// or if a DOM call throws.
	///
	/// The filters stay on the page only while the returned widget is alive.
	/// Keep it (or hand it to [`register`](crate::register)) for as long as
	/// the table should be filterable.
	pub fn attach(
		document: &Document,
		table: Element,
		settings: &FilterSettings,
	) -> Result<Self, FilterError> {
		let sections = TableSections::from_table(table)?;
		let labels = sections.header_labels()?;
		let state = TableFilterState::from_headers(&labels, settings);

		let filter_row: Element = create(document, "tr")?;
		filter_row.set_class_name(&settings.filter_row_class);

		let mut inputs = Vec::new();
		for slot in state.slots() {
			let cell: Element = create(document, "td")?;
			if let FilterSlot::Filter(filter) = slot {
				let input: HtmlInputElement = create(document, "input")?;
				input.set_type("text");
				input.set_class_name(&settings.input_class);
				input.set_placeholder(&settings.placeholder_for(filter.label()));
				input
					.set_attribute("data-index", &filter.column_index().to_string())
					.map_err(js_error)?;
				cell.append_child(&input).map_err(js_error)?;
				inputs.push((filter.column_index(), input));
			}
			filter_row.append_child(&cell).map_err(js_error)?;
		}

		let clear_button: HtmlButtonElement = create(document, "button")?;
		clear_button.set_type("button");
		clear_button.set_class_name(&settings.clear_button_class);
		clear_button.set_text_content(Some(&settings.clear_button_label));

		sections
			.thead()
			.append_child(&filter_row)
			.map_err(js_error)?;
		let table_node: &Node = sections.table();
		sections
			.parent()
			.insert_before(&clear_button, Some(table_node))
			.map_err(js_error)?;
		sections
			.table()
			.set_attribute(INITIALIZED_ATTRIBUTE, "true")
			.map_err(js_error)?;

		let inner = Rc::new(WidgetInner {
			sections,
			state: RefCell::new(state),
			inputs,
			filter_row,
			clear_button,
		});
		let listeners = Self::wire(&inner)?;

		debug_log!("attached {} filter inputs", inner.inputs.len());
		Ok(Self { inner, listeners })
	}

	fn wire(inner: &Rc<WidgetInner>) -> Result<Vec<ListenerHandle>, FilterError> {
		let mut listeners = Vec::with_capacity(inner.inputs.len() + 1);

		for (column_index, input) in &inner.inputs {
			let column_index = *column_index;
			let input_clone = input.clone();
			let widget = Rc::clone(inner);
			listeners.push(ListenerHandle::attach(input, "input", move |_event| {
				if let Err(err) = widget.set_value(column_index, &input_clone.value()) {
					error_log!("failed to store filter value: {}", err);
					return;
				}
				widget.filter_table();
			})?);
		}

		let widget = Rc::clone(inner);
		listeners.push(ListenerHandle::attach(
			&inner.clear_button,
			"click",
			move |_event| {
				widget.clear();
			},
		)?);

		Ok(listeners)
	}

	/// The filtered `<table>` element
	pub fn table(&self) -> &Element {
		self.inner.sections.table()
	}

	/// Snapshot of the current filter state
	pub fn state(&self) -> TableFilterState {
		self.inner.state.borrow().clone()
	}

	/// Filter inputs with their column index
	pub fn inputs(&self) -> &[(usize, HtmlInputElement)] {
		&self.inner.inputs
	}

	/// The inserted filter row
	pub fn filter_row(&self) -> &Element {
		&self.inner.filter_row
	}

	/// The inserted clear-filters button
	pub fn clear_button(&self) -> &HtmlButtonElement {
		&self.inner.clear_button
	}

	/// Re-applies the current filters to every body row
	pub fn filter_table(&self) -> FilterOutcome {
		self.inner.filter_table()
	}

	/// Removes the inserted elements, detaches listeners and shows every row
	///
	/// Same as dropping the widget.
	pub fn teardown(self) {
		drop(self);
	}
}

impl Drop for TableFilterWidget {
	fn drop(&mut self) {
		// Listeners hold clones of `inner`; release them first.
		self.listeners.clear();
		self.inner.remove_from_page();
	}
}

impl Filterable for TableFilterWidget {
	fn filter_by(&mut self, column_index: usize, value: &str) -> Result<(), FilterError> {
		self.inner.set_value(column_index, value)?;
		if let Some((_, input)) = self
			.inner
			.inputs
			.iter()
			.find(|(index, _)| *index == column_index)
		{
			input.set_value(value);
		}
		self.inner.filter_table();
		Ok(())
	}

	fn clear_filters(&mut self) {
		self.inner.clear();
	}

	fn current_filters(&self) -> Vec<(usize, String)> {
		self.inner.state.borrow().current_filters()
	}
}

impl std::fmt::Debug for TableFilterWidget {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TableFilterWidget")
			.field("state", &self.inner.state)
			.field("listeners", &self.listeners.len())
			.finish_non_exhaustive()
	}
}
