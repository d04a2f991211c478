//! Host backed by the real browser through `web-sys`.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::{Closure, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, HtmlImageElement, HtmlScriptElement, Window};

use super::{Host, TimerId};
use crate::core::error::{HostError, LoadError};
use crate::models::Location;
use crate::utils::dom;

/// Why [`BrowserHost::fetch_image`] failed.
#[derive(Debug, Clone, Error)]
pub enum ImageFailure {
    /// The image fired `error`. Holds the event object as dispatched.
    #[error("failed to load image {src}")]
    Event { src: String, event: JsValue },
    /// The load could not be started.
    #[error("{0}")]
    Host(#[from] HostError),
}

impl From<ImageFailure> for LoadError {
    fn from(failure: ImageFailure) -> Self {
        match failure {
            ImageFailure::Event { src, event } => LoadError::Image {
                src,
                event: event
                    .dyn_ref::<Event>()
                    .map(Event::type_)
                    .unwrap_or_else(|| "error".to_string()),
            },
            ImageFailure::Host(e) => LoadError::Host(e),
        }
    }
}

/// The browser window as a [`Host`]. Clones share the timer registry.
#[derive(Clone)]
pub struct BrowserHost {
    window: Window,
    intervals: Rc<RefCell<HashMap<TimerId, Interval>>>,
    next_timer: Rc<Cell<u32>>,
}

impl BrowserHost {
    /// Bind to the global `window`.
    pub fn new() -> Result<Self, HostError> {
        let window = dom::window().ok_or(HostError::NoWindow)?;
        Ok(Self {
            window,
            intervals: Rc::new(RefCell::new(HashMap::new())),
            next_timer: Rc::new(Cell::new(0)),
        })
    }

    /// Load an image, keeping the raw `error` event on failure.
    ///
    /// [`Host::load_image`] reduces the event to its type; JavaScript callers
    /// get the event object itself through this method.
    pub fn fetch_image(
        &self,
        src: &str,
    ) -> impl Future<Output = Result<HtmlImageElement, ImageFailure>> + 'static {
        let src = src.to_string();

        async move {
            let result = fetch_image(&src).await;
            if let Err(e) = &result {
                dom::warn(&e.to_string());
            }
            result
        }
    }
}

impl Host for BrowserHost {
    type Image = HtmlImageElement;

    fn user_agent(&self) -> String {
        self.window.navigator().user_agent().unwrap_or_default()
    }

    fn location(&self) -> Location {
        let location = self.window.location();
        Location {
            pathname: location.pathname().unwrap_or_default(),
            search: location.search().unwrap_or_default(),
            hash: location.hash().unwrap_or_default(),
            origin: location.origin().unwrap_or_default(),
        }
    }

    fn set_hash(&self, hash: &str) {
        let _ = self.window.location().set_hash(hash);
    }

    fn assign(&self, url: &str) {
        let _ = self.window.location().set_href(url);
    }

    fn replace(&self, url: &str) {
        let _ = self.window.location().replace(url);
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to(&self, y: f64) {
        self.window.scroll_to_with_x_and_y(0.0, y);
    }

    fn set_interval(&self, interval_ms: u32, mut tick: Box<dyn FnMut()>) -> TimerId {
        let id = TimerId(self.next_timer.get() + 1);
        self.next_timer.set(id.0);

        let interval = Interval::new(interval_ms, move || tick());
        self.intervals.borrow_mut().insert(id, interval);
        id
    }

    fn clear_interval(&self, id: TimerId) {
        // Dropping the Interval cancels it
        let removed = self.intervals.borrow_mut().remove(&id);
        drop(removed);
    }

    fn request_animation_frame(&self, frame: Box<dyn FnOnce()>) {
        let callback = Closure::once_into_js(move || frame());
        let _ = self
            .window
            .request_animation_frame(callback.unchecked_ref());
    }

    fn insert_script(&self, src: &str) -> impl Future<Output = Result<(), LoadError>> + 'static {
        let window = self.window.clone();
        let src = src.to_string();

        async move {
            let result = load_script(&window, &src).await;
            if let Err(e) = &result {
                dom::warn(&e.to_string());
            }
            result
        }
    }

    fn load_image(
        &self,
        src: &str,
    ) -> impl Future<Output = Result<HtmlImageElement, LoadError>> + 'static {
        let image = self.fetch_image(src);
        async move { image.await.map_err(LoadError::from) }
    }
}

async fn load_script(window: &Window, src: &str) -> Result<(), LoadError> {
    let document = dom::document(window)?;
    let body = dom::body(&document)?;

    let script: HtmlScriptElement = document
        .create_element("script")
        .map_err(|_| HostError::ElementCreationFailed)?
        .unchecked_into();
    body.append_child(&script)
        .map_err(|_| HostError::ElementCreationFailed)?;

    let loaded = dom::load_event_promise(&script)?;
    script.set_src(src);

    JsFuture::from(loaded)
        .await
        .map(|_| ())
        .map_err(|_| LoadError::Script {
            src: src.to_string(),
        })
}

async fn fetch_image(src: &str) -> Result<HtmlImageElement, ImageFailure> {
    let image = HtmlImageElement::new().map_err(|_| HostError::ElementCreationFailed)?;

    let loaded = dom::load_event_promise(&image)?;
    image.set_src(src);

    JsFuture::from(loaded)
        .await
        .map(|_| image)
        .map_err(|event| ImageFailure::Event {
            src: src.to_string(),
            event,
        })
}
