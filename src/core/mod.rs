//! Pure helpers with no dependency on the browser.
//!
//! This module provides:
//! - [`validate_phone`] and [`carrier_of`] for mobile numbers
//! - [`device`] user-agent sniffing
//! - [`url`] path and hash-router string helpers
//! - [`uuid`] identifier generation
//! - [`date_range`] period enumeration
//! - [`padding_zero`] numeric formatting

pub mod date;
pub mod device;
pub mod error;
mod format;
mod id;
mod phone;
pub mod url;

pub use date::{Period, date_range, date_range_by};
pub use device::DeviceFamily;
pub use format::{Padded, padding_zero};
pub use id::{UUID_LEN, uuid, uuid_with_rng};
pub use phone::{Carrier, carrier_of, validate_phone};
pub use url::{ensure_capital_has_not_slash, ensure_tail_has_slash, hash_router_query_string};
