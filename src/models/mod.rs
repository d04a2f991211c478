//! Data models shared between the host and the helpers.
//!
//! - [`Location`] - snapshot of `window.location`

mod location;

pub use location::{Location, full_path};
