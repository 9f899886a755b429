//! Browser binding
//!
//! Re-exports `tablefilter-dom`. The widget types and setup functions only
//! exist when compiling for `wasm32`.
//!
//! ```rust,ignore
//! use tablefilter::dom::install;
//!
//! install()?;
//! ```

pub use tablefilter_dom::*;
