//! Client-side helpers for mobile H5 pages.
//!
//! - [`core`] - pure helpers: phone validation, user-agent sniffing, URL
//!   strings, identifiers, date ranges, padding
//! - [`web`] - host-driven effects: countdown, scroll animation, loaders,
//!   navigation
//! - [`host`] - the [`Host`](host::Host) capability trait and its
//!   implementations
//!
//! On `wasm32` every helper is also exported to JavaScript under its
//! camelCase name.

pub mod config;
pub mod core;
pub mod host;
pub mod models;
pub mod utils;
pub mod web;

#[cfg(target_arch = "wasm32")]
mod bindings;

pub use crate::core::error::{DateRangeError, HostError, LoadError, ScrollError};
pub use crate::core::{
    Carrier, DeviceFamily, Padded, Period, carrier_of, date_range, date_range_by,
    ensure_capital_has_not_slash, ensure_tail_has_slash, hash_router_query_string, padding_zero,
    uuid, validate_phone,
};
pub use crate::host::{Host, TimerId};
pub use crate::models::{Location, full_path};
pub use crate::web::{
    CountDownOptions, Easing, GoH5Options, ScrollAnimation, ScrollOptions, Subscription,
    count_down, go_h5, insert_script, load_image, scroll_to_y,
};
