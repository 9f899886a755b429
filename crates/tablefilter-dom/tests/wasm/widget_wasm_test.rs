//! Table filter widget WASM tests
//!
//! Builds tables in a real document and drives the widget through DOM
//! events and its programmatic API.
//!
//! **Run with**: `wasm-pack test --chrome --headless crates/tablefilter-dom`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlElement};

use tablefilter_core::{FilterSettings, Filterable};
use tablefilter_dom::{TableFilterWidget, setup_table_filters};

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

/// Mounts `html` in a fresh container and returns the container
fn mount(html: &str) -> Element {
	let document = document();
	let container = document.create_element("div").unwrap();
	container.set_inner_html(html);
	document.body().unwrap().append_child(&container).unwrap();
	container
}

fn attach(container: &Element) -> TableFilterWidget {
	let table = container.query_selector("table").unwrap().unwrap();
	TableFilterWidget::attach(&document(), table, &FilterSettings::default()).unwrap()
}

fn row_displays(container: &Element) -> Vec<String> {
	let rows = container.query_selector_all("tbody tr").unwrap();
	(0..rows.length())
		.map(|i| {
			rows.item(i)
				.unwrap()
				.dyn_into::<HtmlElement>()
				.unwrap()
				.style()
				.get_property_value("display")
				.unwrap()
		})
		.collect()
}

fn type_into(widget: &TableFilterWidget, column_index: usize, value: &str) {
	let (_, input) = widget
		.inputs()
		.iter()
		.find(|(index, _)| *index == column_index)
		.unwrap();
	input.set_value(value);
	input
		.dispatch_event(&Event::new("input").unwrap())
		.unwrap();
}

// ============================================================================
// Initialization
// ============================================================================

#[wasm_bindgen_test]
fn test_filter_row_appended_after_header() {
	let container = mount(USERS_TABLE);
	let _widget = attach(&container);

	let header_rows = container.query_selector_all("thead tr").unwrap();
	assert_eq!(header_rows.length(), 2);

	let filter_row = container.query_selector("thead tr.filter-row").unwrap();
	assert!(filter_row.is_some());
	assert_eq!(filter_row.unwrap().child_element_count(), 3);
}

#[wasm_bindgen_test]
fn test_actions_column_gets_no_input() {
	let container = mount(USERS_TABLE);
	let widget = attach(&container);

	let indices: Vec<usize> = widget.inputs().iter().map(|(index, _)| *index).collect();
	assert_eq!(indices, vec![0, 1]);

	let cells = container.query_selector_all("tr.filter-row td").unwrap();
	let actions_cell = cells.item(2).unwrap().dyn_into::<Element>().unwrap();
	assert_eq!(actions_cell.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn test_inputs_carry_placeholder_and_index() {
	let container = mount(USERS_TABLE);
	let widget = attach(&container);

	let (_, status_input) = &widget.inputs()[1];
	assert_eq!(status_input.placeholder(), "Filtrar Status");
	assert_eq!(status_input.get_attribute("data-index").as_deref(), Some("1"));
	assert!(status_input.class_list().contains("filter-input"));
}

#[wasm_bindgen_test]
fn test_clear_button_inserted_before_table() {
	let container = mount(USERS_TABLE);
	let _widget = attach(&container);

	let first = container.first_element_child().unwrap();
	assert_eq!(first.tag_name(), "BUTTON");
	assert_eq!(first.text_content().as_deref(), Some("Limpar Filtros"));
	assert_eq!(first.next_element_sibling().unwrap().tag_name(), "TABLE");
}

// ============================================================================
// Filtering
// ============================================================================

#[wasm_bindgen_test]
fn test_typing_filters_rows() {
	let container = mount(USERS_TABLE);
	let widget = attach(&container);

	type_into(&widget, 0, "ALI");
	assert_eq!(row_displays(&container), vec!["", "none"]);
}

#[wasm_bindgen_test]
fn test_filters_are_anded() {
	let container = mount(USERS_TABLE);
	let widget = attach(&container);

	type_into(&widget, 0, "a");
	type_into(&widget, 1, "active");
	assert_eq!(row_displays(&container), vec!["", "none"]);
}

#[wasm_bindgen_test]
fn test_clear_button_restores_rows() {
	let container = mount(USERS_TABLE);
	let widget = attach(&container);

	type_into(&widget, 0, "bob");
	assert_eq!(row_displays(&container), vec!["none", ""]);

	widget.clear_button().click();

	assert_eq!(row_displays(&container), vec!["", ""]);
	assert!(widget.inputs().iter().all(|(_, input)| input.value().is_empty()));
	assert!(widget.current_filters().is_empty());
}

#[wasm_bindgen_test]
fn test_short_row_hidden_when_its_column_is_filtered() {
	let container = mount(
		r#"<table class="filterable">
		<thead><tr><th>Name</th><th>Status</th></tr></thead>
		<tbody>
			<tr><td>Alice</td><td>Active</td></tr>
			<tr><td>Bob</td></tr>
		</tbody>
		</table>"#,
	);
	let widget = attach(&container);

	type_into(&widget, 1, "act");
	assert_eq!(row_displays(&container), vec!["", "none"]);
}

#[wasm_bindgen_test]
fn test_filter_by_updates_input_and_rows() {
	let container = mount(USERS_TABLE);
	let mut widget = attach(&container);

	widget.filter_by(1, "inact").unwrap();

	assert_eq!(widget.inputs()[1].1.value(), "inact");
	assert_eq!(row_displays(&container), vec!["none", ""]);
	assert!(widget.filter_by(2, "edit").is_err());
}

#[wasm_bindgen_test]
fn test_filter_table_is_idempotent() {
	let container = mount(USERS_TABLE);
	let widget = attach(&container);

	type_into(&widget, 0, "ali");
	let first = widget.filter_table();
	let displays = row_displays(&container);
	let second = widget.filter_table();

	assert_eq!(first, second);
	assert_eq!(row_displays(&container), displays);
}

// ============================================================================
// Page setup and teardown
// ============================================================================

#[wasm_bindgen_test]
fn test_tables_filter_independently() {
	let container = mount(&format!("{}{}", USERS_TABLE, USERS_TABLE));
	let widgets: Vec<TableFilterWidget> = container
		.query_selector_all("table")
		.map(|tables| {
			(0..tables.length())
				.map(|i| {
					let table = tables.item(i).unwrap().dyn_into::<Element>().unwrap();
					TableFilterWidget::attach(&document(), table, &FilterSettings::default())
						.unwrap()
				})
				.collect()
		})
		.unwrap();

	type_into(&widgets[0], 0, "bob");

	assert_eq!(row_displays(&container), vec!["none", "", "", ""]);
	assert!(widgets[1].current_filters().is_empty());
}

#[wasm_bindgen_test]
fn test_setup_skips_initialized_and_malformed_tables() {
	let container = mount(&format!(
		r#"<div class="tf-setup-test">{}<table class="filterable"><tbody></tbody></table></div>"#,
		USERS_TABLE
	));
	let settings = FilterSettings::default().with_table_selector(".tf-setup-test table.filterable");

	let first = setup_table_filters(&document(), &settings).unwrap();
	assert_eq!(first.len(), 1);

	let second = setup_table_filters(&document(), &settings).unwrap();
	assert!(second.is_empty());
	assert_eq!(container.query_selector_all("tr.filter-row").unwrap().length(), 1);

	for widget in first {
		widget.teardown();
	}
	container.remove();
}

#[wasm_bindgen_test]
fn test_teardown_restores_table() {
	let container = mount(USERS_TABLE);
	let widget = attach(&container);

	type_into(&widget, 0, "ali");
	widget.teardown();

	assert!(container.query_selector("tr.filter-row").unwrap().is_none());
	assert!(container.query_selector("button").unwrap().is_none());
	assert_eq!(row_displays(&container), vec!["", ""]);

	let table = container.query_selector("table").unwrap().unwrap();
	assert!(table.get_attribute("data-filters-initialized").is_none());
}

#[wasm_bindgen_test]
fn test_dropped_widget_can_be_set_up_again() {
	let container = mount(&format!(r#"<div class="tf-drop-test">{}</div>"#, USERS_TABLE));
	let settings = FilterSettings::default().with_table_selector(".tf-drop-test table.filterable");

	{
		let widget = attach(&container);
		type_into(&widget, 0, "bob");
		assert_eq!(row_displays(&container), vec!["none", ""]);
	}

	assert!(container.query_selector("tr.filter-row").unwrap().is_none());
	assert!(container.query_selector("button").unwrap().is_none());
	assert_eq!(row_displays(&container), vec!["", ""]);

	let widgets = setup_table_filters(&document(), &settings).unwrap();
	assert_eq!(widgets.len(), 1);
	assert_eq!(container.query_selector_all("tr.filter-row").unwrap().length(), 1);

	drop(widgets);
	container.remove();
}
