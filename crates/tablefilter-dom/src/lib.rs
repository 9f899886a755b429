//! WASM binding for live table column filters
//!
//! Attaches a row of per-column text filters to every `table.filterable` on
//! the page, plus a "clear filters" button before each table. Typing in any
//! filter immediately hides the body rows that do not match; the matching
//! itself lives in [`tablefilter_core`].
//!
//! ## Usage
//!
//! From Rust:
//!
//! ```ignore
//! use tablefilter_dom::install;
//!
//! install()?;
//! ```
//!
//! From JavaScript, after loading the generated bindings:
//!
//! ```text
//! setupTableFilters();                                  // defaults
//! setupTableFilters('{"placeholder_prefix": "Filter"}'); // custom settings
//! teardownTableFilters();
//! ```
//!
//! Everything touching the DOM is only compiled for `wasm32`.

#![warn(missing_docs)]

pub mod logging;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
pub mod listener;
#[cfg(target_arch = "wasm32")]
pub mod registry;
#[cfg(target_arch = "wasm32")]
pub mod table;
#[cfg(target_arch = "wasm32")]
pub mod widget;

#[cfg(target_arch = "wasm32")]
pub use registry::{register, registered_count, setup_table_filters, teardown_all};
#[cfg(target_arch = "wasm32")]
pub use widget::TableFilterWidget;

#[cfg(target_arch = "wasm32")]
mod entry {
	use tablefilter_core::{FilterError, FilterSettings};
	use wasm_bindgen::JsCast;
	use wasm_bindgen::prelude::*;
	use web_sys::{AddEventListenerOptions, Document};

	use crate::dom::global_document;
	use crate::registry::{register, registered_count, setup_table_filters, teardown_all};
	use crate::{error_log, info_log};

	/// Sets up filters with default settings once the document has loaded
	pub fn install() -> Result<(), FilterError> {
		install_with(FilterSettings::default())
	}

	/// Sets up filters with `settings` once the document has loaded
	///
	/// Runs immediately if the document is past the `loading` state,
	/// otherwise on `DOMContentLoaded`.
	pub fn install_with(settings: FilterSettings) -> Result<(), FilterError> {
		#[cfg(feature = "console_error_panic_hook")]
		console_error_panic_hook::set_once();

		#[cfg(feature = "tracing-wasm")]
		let _ = tracing_wasm::try_set_as_global_default();

		settings.validate()?;
		let document = global_document()?;

		if document.ready_state() != "loading" {
			register(setup_table_filters(&document, &settings)?);
			return Ok(());
		}
		defer_until_ready(&document, settings)
	}

	/// Sets up filters with `settings` on the next `DOMContentLoaded` of `document`
	pub fn defer_until_ready(
		document: &Document,
		settings: FilterSettings,
	) -> Result<(), FilterError> {
		settings.validate()?;
		let listener_document = document.clone();
		let on_ready = Closure::once_into_js(move || {
			match setup_table_filters(&listener_document, &settings) {
				Ok(widgets) => register(widgets),
				Err(err) => error_log!("table filter setup failed: {}", err),
			}
		});
		let options = AddEventListenerOptions::new();
		options.set_once(true);
		document
			.add_event_listener_with_callback_and_add_event_listener_options(
				"DOMContentLoaded",
				on_ready.unchecked_ref::<js_sys::Function>(),
				&options,
			)
			.map_err(crate::dom::js_error)?;
		info_log!("table filters deferred until DOMContentLoaded");
		Ok(())
	}

	/// JS entry point: attaches filters now and returns the number of live widgets
	#[wasm_bindgen(js_name = setupTableFilters)]
	pub fn setup_table_filters_js(settings_json: Option<String>) -> Result<usize, JsValue> {
		let settings = match settings_json {
			Some(json) => FilterSettings::from_json(&json),
			None => Ok(FilterSettings::default()),
		}
		.map_err(|err| JsValue::from_str(&err.to_string()))?;

		let document = global_document().map_err(|err| JsValue::from_str(&err.to_string()))?;
		let widgets = setup_table_filters(&document, &settings)
			.map_err(|err| JsValue::from_str(&err.to_string()))?;
		register(widgets);
		Ok(registered_count())
	}

	/// JS entry point: removes every filter row and clear button
	#[wasm_bindgen(js_name = teardownTableFilters)]
	pub fn teardown_table_filters_js() -> usize {
		teardown_all()
	}
}

#[cfg(target_arch = "wasm32")]
pub use entry::{
	defer_until_ready, install, install_with, setup_table_filters_js, teardown_table_filters_js,
};
