//! Host environment abstraction.
//!
//! Every helper that touches browser state goes through [`Host`], so the
//! same code runs against the real browser ([`BrowserHost`], wasm only) or
//! an in-memory fake ([`MockHost`], tests and the `mock` feature).

use std::future::Future;

use crate::core::error::LoadError;
use crate::models::Location;

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(any(test, feature = "mock"))]
mod mock;

#[cfg(target_arch = "wasm32")]
pub use browser::{BrowserHost, ImageFailure};
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockHost, Navigation};

/// Identifier of a repeating timer registered with [`Host::set_interval`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u32);

/// Browser capabilities the helpers depend on.
pub trait Host {
    /// Handle to a loaded image.
    type Image;

    // -------------------------------------------------------------------------
    // Navigator
    // -------------------------------------------------------------------------

    /// Current `navigator.userAgent`.
    fn user_agent(&self) -> String;

    // -------------------------------------------------------------------------
    // Location
    // -------------------------------------------------------------------------

    /// Current location snapshot.
    fn location(&self) -> Location;

    /// Set `location.hash` (adds a history entry). `hash` includes the `#`.
    fn set_hash(&self, hash: &str);

    /// Navigate to `url` by assigning `location.href`.
    fn assign(&self, url: &str);

    /// Navigate to `url` replacing the current history entry.
    fn replace(&self, url: &str);

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;

    /// Scroll the window to vertical offset `y`.
    fn scroll_to(&self, y: f64);

    // -------------------------------------------------------------------------
    // Scheduling
    // -------------------------------------------------------------------------

    /// Run `tick` every `interval_ms` milliseconds until cleared.
    fn set_interval(&self, interval_ms: u32, tick: Box<dyn FnMut()>) -> TimerId;

    /// Stop a repeating timer. Unknown or already-cleared ids are ignored.
    fn clear_interval(&self, id: TimerId);

    /// Run `frame` before the next repaint.
    fn request_animation_frame(&self, frame: Box<dyn FnOnce()>);

    // -------------------------------------------------------------------------
    // Resource loading
    // -------------------------------------------------------------------------

    /// Append a `<script src>` to the document and wait for it to load.
    fn insert_script(&self, src: &str) -> impl Future<Output = Result<(), LoadError>> + 'static;

    /// Load an image into memory.
    fn load_image(&self, src: &str)
    -> impl Future<Output = Result<Self::Image, LoadError>> + 'static;
}
