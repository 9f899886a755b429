//! Page-level setup WASM tests
//!
//! Covers the install entry points, the JS exports and the widget registry.
//! The registry is shared by every test in this file, so each test scopes
//! its selector to its own container and tears everything down at the end.
//!
//! **Run with**: `wasm-pack test --chrome --headless crates/tablefilter-dom`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event};

use tablefilter_core::FilterSettings;
use tablefilter_dom::{
	defer_until_ready, install_with, register, registered_count, setup_table_filters,
	setup_table_filters_js, teardown_all, teardown_table_filters_js,
};

wasm_bindgen_test_configure!(run_in_browser);

const USERS_TABLE: &str = r##"
<table class="filterable">
  <thead><tr><th>Name</th><th>Status</th><th>Actions</th></tr></thead>
  <tbody>
    <tr><td>Alice</td><td>Active</td><td><a href="#">edit</a></td></tr>
    <tr><td>Bob</td><td>Inactive</td><td><a href="#">edit</a></td></tr>
  </tbody>
</table>
"##;

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

/// Mounts `tables` copies of the users table in a container with class `scope`
fn mount(scope: &str, tables: usize) -> Element {
	let document = document();
	let container = document.create_element("div").unwrap();
	container.set_class_name(scope);
	container.set_inner_html(&USERS_TABLE.repeat(tables));
	document.body().unwrap().append_child(&container).unwrap();
	container
}

fn scoped(scope: &str) -> FilterSettings {
	FilterSettings::default().with_table_selector(format!(".{} table.filterable", scope))
}

fn count(container: &Element, selector: &str) -> u32 {
	container.query_selector_all(selector).unwrap().length()
}

// ============================================================================
// install_with / defer_until_ready
// ============================================================================

#[wasm_bindgen_test]
fn test_install_with_runs_immediately_on_loaded_document() {
	let container = mount("tf-install", 2);
	let before = registered_count();

	install_with(scoped("tf-install")).unwrap();

	assert_eq!(registered_count(), before + 2);
	assert_eq!(count(&container, "tr.filter-row"), 2);

	install_with(scoped("tf-install")).unwrap();

	assert_eq!(registered_count(), before + 2);
	assert_eq!(count(&container, "tr.filter-row"), 2);

	teardown_all();
	container.remove();
}

#[wasm_bindgen_test]
fn test_install_with_rejects_empty_selector() {
	let before = registered_count();
	assert!(install_with(FilterSettings::default().with_table_selector("")).is_err());
	assert_eq!(registered_count(), before);
}

#[wasm_bindgen_test]
fn test_defer_until_ready_waits_for_dom_content_loaded() {
	let container = mount("tf-deferred", 1);
	let before = registered_count();

	defer_until_ready(&document(), scoped("tf-deferred")).unwrap();
	assert_eq!(count(&container, "tr.filter-row"), 0);

	document()
		.dispatch_event(&Event::new("DOMContentLoaded").unwrap())
		.unwrap();

	assert_eq!(count(&container, "tr.filter-row"), 1);
	assert_eq!(registered_count(), before + 1);

	teardown_all();
	container.remove();
}

// ============================================================================
// JS entry points
// ============================================================================

#[wasm_bindgen_test]
fn test_setup_table_filters_js_returns_live_count() {
	let container = mount("tf-js-setup", 2);
	let before = registered_count();

	let live = setup_table_filters_js(Some(
		r#"{"table_selector": ".tf-js-setup table.filterable"}"#.to_string(),
	))
	.unwrap();

	assert_eq!(live, before + 2);
	assert_eq!(count(&container, "button"), 2);

	teardown_all();
	container.remove();
}

#[wasm_bindgen_test]
fn test_setup_table_filters_js_rejects_bad_settings() {
	assert!(setup_table_filters_js(Some(r#"{"table_selector": ""}"#.to_string())).is_err());
	assert!(setup_table_filters_js(Some("not json".to_string())).is_err());
}

#[wasm_bindgen_test]
fn test_teardown_table_filters_js_removes_everything() {
	teardown_all();
	let container = mount("tf-js-teardown", 2);
	setup_table_filters_js(Some(
		r#"{"table_selector": ".tf-js-teardown table.filterable"}"#.to_string(),
	))
	.unwrap();

	assert_eq!(teardown_table_filters_js(), 2);

	assert_eq!(registered_count(), 0);
	assert_eq!(count(&container, "tr.filter-row"), 0);
	assert_eq!(count(&container, "button"), 0);
	assert_eq!(count(&container, "table[data-filters-initialized]"), 0);
	assert_eq!(teardown_table_filters_js(), 0);

	container.remove();
}

// ============================================================================
// Registry
// ============================================================================

#[wasm_bindgen_test]
fn test_registered_widgets_outlive_setup_call() {
	teardown_all();
	let container = mount("tf-registry", 1);

	register(setup_table_filters(&document(), &scoped("tf-registry")).unwrap());

	assert_eq!(registered_count(), 1);
	assert_eq!(count(&container, "tr.filter-row"), 1);

	assert_eq!(teardown_all(), 1);
	assert_eq!(registered_count(), 0);
	assert_eq!(count(&container, "tr.filter-row"), 0);

	register(setup_table_filters(&document(), &scoped("tf-registry")).unwrap());
	assert_eq!(count(&container, "tr.filter-row"), 1);

	teardown_all();
	container.remove();
}
