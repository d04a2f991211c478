//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use js_sys::Promise;
use web_sys::{AddEventListenerOptions, Document, EventTarget, HtmlElement, Window};

use crate::core::error::HostError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document of `window`.
pub fn document(window: &Window) -> Result<Document, HostError> {
    window.document().ok_or(HostError::NoDocument)
}

/// Get `document.body`.
pub fn body(document: &Document) -> Result<HtmlElement, HostError> {
    document.body().ok_or(HostError::NoBody)
}

/// Promise settled by the first `load` (resolve) or `error` (reject) event
/// fired on `target`. The rejection value is the `error` event itself.
///
/// Listeners are registered with `once`, so each fires at most one time.
/// Must be called before the load is started (e.g. before setting `src`).
pub fn load_event_promise(target: &EventTarget) -> Result<Promise, HostError> {
    let mut registered = Ok(());
    let promise = Promise::new(&mut |resolve, reject| {
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        registered = target
            .add_event_listener_with_callback_and_add_event_listener_options(
                "load", &resolve, &options,
            )
            .and_then(|()| {
                target.add_event_listener_with_callback_and_add_event_listener_options(
                    "error", &reject, &options,
                )
            })
            .map_err(|_| HostError::ListenerRegistrationFailed);
    });
    registered.map(|()| promise)
}

/// Log a warning to the browser console.
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}
