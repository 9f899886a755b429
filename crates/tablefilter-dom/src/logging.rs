//! Console logging for the filter widget
//!
//! The macros write to the browser console on WASM and to stderr on native
//! targets, prefixed with `[tablefilter]`. All of them compile to nothing in
//! release builds.
//!
//! | Macro | Debug Assertions | Feature Required | WASM | Non-WASM |
//! |-------|------------------|------------------|------|----------|
//! | `debug_log!` | Required | `debug-hooks` | `console.debug` | `eprintln!` |
//! | `info_log!` | Required | None | `console.info` | `eprintln!` |
//! | `warn_log!` | Required | None | `console.warn` | `eprintln!` |
//! | `error_log!` | Required | None | `console.error` | `eprintln!` |
//!
//! ```ignore
//! use tablefilter_dom::{debug_log, warn_log};
//!
//! debug_log!("filtered {} rows", outcome.total());
//! warn_log!("skipping table: {}", err);
//! ```

/// Logs a debug message (requires `debug-hooks` feature + `debug_assertions`)
///
/// Meant for per-keystroke detail such as row counts after each pass.
/// Compiles to a no-op unless both conditions hold.
///
/// # Arguments
///
/// Takes format arguments similar to `format!` or `println!`.
///
/// # Example
///
/// ```ignore
/// debug_log!("{} of {} rows visible", outcome.visible, outcome.total());
/// ```
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-hooks", target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		web_sys::console::debug_1(&format!("[tablefilter] {}", format!($($arg)*)).into());
	}};
}

/// Logs a debug message (requires `debug-hooks` feature + `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-hooks", not(target_arch = "wasm32")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		eprintln!("[tablefilter] [DEBUG] {}", format!($($arg)*));
	}};
}

/// No-op debug_log when conditions are not met
#[macro_export]
#[cfg(not(all(debug_assertions, feature = "debug-hooks")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{}};
}

/// Logs an info message (requires `debug_assertions`)
///
/// Used for page-level events like setup completing or being deferred.
/// Compiles to a no-op in release builds.
///
/// # Arguments
///
/// Takes format arguments similar to `format!` or `println!`.
///
/// # Example
///
/// ```ignore
/// info_log!("initialized filters on {} tables", widgets.len());
/// ```
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		web_sys::console::info_1(&format!("[tablefilter] {}", format!($($arg)*)).into());
	}};
}

/// Logs an info message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		eprintln!("[tablefilter] [INFO] {}", format!($($arg)*));
	}};
}

/// No-op info_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! info_log {
	($($arg:tt)*) => {{}};
}

/// Logs a warning, e.g. a table skipped during setup (requires `debug_assertions`)
///
/// Compiles to a no-op in release builds.
///
/// # Arguments
///
/// Takes format arguments similar to `format!` or `println!`.
///
/// # Example
///
/// ```ignore
/// warn_log!("skipping table: {}", err);
/// ```
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		web_sys::console::warn_1(&format!("[tablefilter] {}", format!($($arg)*)).into());
	}};
}

/// Logs a warning (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		eprintln!("[tablefilter] [WARN] {}", format!($($arg)*));
	}};
}

/// No-op warn_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! warn_log {
	($($arg:tt)*) => {{}};
}

/// Logs an error, e.g. a failed DOM update (requires `debug_assertions`)
///
/// Compiles to a no-op in release builds.
///
/// # Arguments
///
/// Takes format arguments similar to `format!` or `println!`.
///
/// # Example
///
/// ```ignore
/// error_log!("failed to update row display: {}", err);
/// ```
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		web_sys::console::error_1(&format!("[tablefilter] {}", format!($($arg)*)).into());
	}};
}

/// Logs an error (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		eprintln!("[tablefilter] [ERROR] {}", format!($($arg)*));
	}};
}

/// No-op error_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! error_log {
	($($arg:tt)*) => {{}};
}
