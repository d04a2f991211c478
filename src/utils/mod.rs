//! Browser utility functions.
//!
//! Provides:
//! - [`is_undef`], [`is_func`] - JavaScript value predicates
//! - [`dom`] - `web-sys` accessors used by the browser host (wasm only)

#[cfg(target_arch = "wasm32")]
pub mod dom;
mod predicate;

pub use predicate::{is_func, is_undef};
