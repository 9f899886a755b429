//! Error types for tablefilter-core

use thiserror::Error;

/// Error type for table filter operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
	/// Column index does not exist in the table header
	#[error("Column index {index} out of range (table has {columns} columns)")]
	ColumnOutOfRange {
		/// Requested column index
		index: usize,
		/// Number of header columns
		columns: usize,
	},

	/// Column is excluded from filtering (e.g. the "Actions" column)
	#[error("Column {0} is excluded from filtering")]
	ExcludedColumn(usize),

	/// Table is missing a required section (`thead` or `tbody`)
	#[error("Table is missing its <{0}> section")]
	MissingSection(&'static str),

	/// Table has no parent node to attach the clear button to
	#[error("Table is not attached to the document")]
	Detached,

	/// Settings failed to parse or validate
	#[error("Invalid settings: {0}")]
	InvalidSettings(String),

	/// DOM operation failed
	#[error("DOM error: {0}")]
	Dom(String),
}

/// Result type for table filter operations
pub type Result<T> = std::result::Result<T, FilterError>;
