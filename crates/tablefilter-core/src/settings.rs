//! Filter widget settings
//!
//! Every field has a default matching the dashboard's Bootstrap markup, so an
//! empty JSON object (`{}`) deserializes to [`FilterSettings::default`].

use crate::error::{FilterError, Result};
use serde::{Deserialize, Serialize};

/// Settings controlling which tables are filterable and how the filter
/// controls are rendered.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSettings {
	/// CSS selector marking filterable tables
	#[serde(default = "default_table_selector")]
	pub table_selector: String,

	/// Header labels (compared trimmed and lowercased) that never get a filter
	#[serde(default = "default_excluded_labels")]
	pub excluded_labels: Vec<String>,

	/// Prefix for input placeholders, rendered as `"{prefix} {label}"`
	#[serde(default = "default_placeholder_prefix")]
	pub placeholder_prefix: String,

	/// Text of the clear-filters button
	#[serde(default = "default_clear_button_label")]
	pub clear_button_label: String,

	/// Class of the inserted filter row
	#[serde(default = "default_filter_row_class")]
	pub filter_row_class: String,

	/// Classes of each filter input
	#[serde(default = "default_input_class")]
	pub input_class: String,

	/// Classes of the clear-filters button
	#[serde(default = "default_clear_button_class")]
	pub clear_button_class: String,
}

fn default_table_selector() -> String {
	"table.filterable".to_string()
}

fn default_excluded_labels() -> Vec<String> {
	vec!["actions".to_string(), "ações".to_string()]
}

fn default_placeholder_prefix() -> String {
	"Filtrar".to_string()
}

fn default_clear_button_label() -> String {
	"Limpar Filtros".to_string()
}

fn default_filter_row_class() -> String {
	"filter-row".to_string()
}

fn default_input_class() -> String {
	"form-control form-control-sm filter-input".to_string()
}

fn default_clear_button_class() -> String {
	"btn btn-sm btn-secondary mt-2 mb-3".to_string()
}

impl Default for FilterSettings {
	fn default() -> Self {
		Self {
			table_selector: default_table_selector(),
			excluded_labels: default_excluded_labels(),
			placeholder_prefix: default_placeholder_prefix(),
			clear_button_label: default_clear_button_label(),
			filter_row_class: default_filter_row_class(),
			input_class: default_input_class(),
			clear_button_class: default_clear_button_class(),
		}
	}
}

impl FilterSettings {
	/// Create new settings with defaults
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse settings from JSON and validate them
	///
	/// # Example
	///
	/// ```rust
	/// use tablefilter_core::FilterSettings;
	///
	/// let settings = FilterSettings::from_json(r#"{"placeholder_prefix": "Filter"}"#).unwrap();
	/// assert_eq!(settings.placeholder_prefix, "Filter");
	/// assert_eq!(settings.table_selector, "table.filterable");
	/// ```
	pub fn from_json(json: &str) -> Result<Self> {
		let settings: Self = serde_json::from_str(json)
			.map_err(|e| FilterError::InvalidSettings(e.to_string()))?;
		settings.validate()?;
		Ok(settings)
	}

	/// Validate settings
	pub fn validate(&self) -> Result<()> {
		if self.table_selector.trim().is_empty() {
			return Err(FilterError::InvalidSettings(
				"table_selector must not be empty".to_string(),
			));
		}
		Ok(())
	}

	/// Set the table selector
	pub fn with_table_selector(mut self, selector: impl Into<String>) -> Self {
		self.table_selector = selector.into();
		self
	}

	/// Replace the excluded header labels
	pub fn with_excluded_labels<I, S>(mut self, labels: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.excluded_labels = labels.into_iter().map(Into::into).collect();
		self
	}

	/// Set the placeholder prefix
	pub fn with_placeholder_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.placeholder_prefix = prefix.into();
		self
	}

	/// Set the clear-filters button text
	pub fn with_clear_button_label(mut self, label: impl Into<String>) -> Self {
		self.clear_button_label = label.into();
		self
	}

	/// Returns true if a header with this text gets no filter control
	pub fn is_excluded_label(&self, header_text: &str) -> bool {
		let normalized = header_text.trim().to_lowercase();
		self.excluded_labels
			.iter()
			.any(|label| label.trim().to_lowercase() == normalized)
	}

	/// Placeholder text for a filter input on the given header
	pub fn placeholder_for(&self, header_text: &str) -> String {
		format!("{} {}", self.placeholder_prefix, header_text.trim())
	}
}
