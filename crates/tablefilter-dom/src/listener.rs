//! Event listeners removed on drop

use tablefilter_core::FilterError;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Event, EventTarget};

use crate::dom::js_error;

/// An attached event listener
///
/// Dropping the handle detaches the listener and frees its closure.
pub struct ListenerHandle {
	target: EventTarget,
	event_type: &'static str,
	closure: Closure<dyn FnMut(Event)>,
}

impl ListenerHandle {
	/// Attaches `callback` to `target` for `event_type`
	pub fn attach<F>(target: &EventTarget, event_type: &'static str, callback: F) -> Result<Self, FilterError>
	where
		F: FnMut(Event) + 'static,
	{
		let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
		target
			.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
			.map_err(js_error)?;

		Ok(Self {
			target: target.clone(),
			event_type,
			closure,
		})
	}
}

impl Drop for ListenerHandle {
	fn drop(&mut self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.event_type, self.closure.as_ref().unchecked_ref());
	}
}

impl std::fmt::Debug for ListenerHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ListenerHandle")
			.field("event_type", &self.event_type)
			.finish_non_exhaustive()
	}
}
