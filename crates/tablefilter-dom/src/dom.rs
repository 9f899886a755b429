//! Thin helpers over web-sys used by the widget

use tablefilter_core::FilterError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

/// Converts a JavaScript exception into a [`FilterError::Dom`]
pub(crate) fn js_error(value: JsValue) -> FilterError {
	FilterError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// Returns the global document
pub(crate) fn global_document() -> Result<Document, FilterError> {
	web_sys::window()
		.and_then(|window| window.document())
		.ok_or_else(|| FilterError::Dom("no global document".to_string()))
}

/// Creates an element and casts it to the requested type
pub(crate) fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T, FilterError> {
	document
		.create_element(tag)
		.map_err(js_error)?
		.dyn_into::<T>()
		.map_err(|_| FilterError::Dom(format!("<{}> has an unexpected type", tag)))
}

/// Collects the elements matched by `selector` under `root`
pub(crate) fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, FilterError> {
	let nodes = root.query_selector_all(selector).map_err(js_error)?;
	Ok((0..nodes.length())
		.filter_map(|i| nodes.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect())
}
