//! Page-level setup and the registry of live widgets
//!
//! Widgets must outlive the call that created them, since dropping one
//! removes its filters from the page. Setup from [`crate::install`] or the JS
//! entry point parks them here until [`teardown_all`].

use std::cell::RefCell;

use tablefilter_core::{FilterError, FilterSettings};
use web_sys::Document;

use crate::dom::query_all;
use crate::widget::{INITIALIZED_ATTRIBUTE, TableFilterWidget};
use crate::{info_log, warn_log};

thread_local! {
	static WIDGETS: RefCell<Vec<TableFilterWidget>> = const { RefCell::new(Vec::new()) };
}

/// Attaches filters to every table matching `settings.table_selector`
///
/// Tables that already carry filters are skipped. A table that cannot be
/// set up (missing sections, detached) is logged and skipped without
/// affecting the others.
pub fn setup_table_filters(
	document: &Document,
	settings: &FilterSettings,
) -> Result<Vec<TableFilterWidget>, FilterError> {
	settings.validate()?;
	let root = document
		.document_element()
		.ok_or_else(|| FilterError::Dom("document has no root element".to_string()))?;

	let mut widgets = Vec::new();
	for table in query_all(&root, &settings.table_selector)? {
		if table.get_attribute(INITIALIZED_ATTRIBUTE).as_deref() == Some("true") {
			continue;
		}
		match TableFilterWidget::attach(document, table, settings) {
			Ok(widget) => widgets.push(widget),
			Err(err) => warn_log!("skipping table: {}", err),
		}
	}

	info_log!("initialized filters on {} tables", widgets.len());
	Ok(widgets)
}

/// Keeps widgets alive for the rest of the page's lifetime
pub fn register(widgets: Vec<TableFilterWidget>) {
	WIDGETS.with(|registry| registry.borrow_mut().extend(widgets));
}

/// Number of registered widgets
pub fn registered_count() -> usize {
	WIDGETS.with(|registry| registry.borrow().len())
}

/// Tears down every registered widget, returning how many were removed
pub fn teardown_all() -> usize {
	let widgets = WIDGETS.with(|registry| std::mem::take(&mut *registry.borrow_mut()));
	let count = widgets.len();
	for widget in widgets {
		widget.teardown();
	}
	count
}
