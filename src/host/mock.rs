//! In-memory host for tests.
//!
//! Records navigations and scroll positions, and lets tests drive timers
//! and animation frames by hand.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::future::{Future, ready};
use std::rc::Rc;

use super::{Host, TimerId};
use crate::core::error::LoadError;
use crate::models::Location;

/// A navigation performed through the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    SetHash(String),
    Assign(String),
    Replace(String),
}

struct Interval {
    interval_ms: u32,
    /// Taken out while the tick runs so it may clear itself.
    tick: Option<Box<dyn FnMut()>>,
}

#[derive(Default)]
struct MockState {
    user_agent: String,
    location: Location,
    navigations: Vec<Navigation>,
    scroll_y: f64,
    scroll_history: Vec<f64>,
    next_timer: u32,
    intervals: BTreeMap<TimerId, Interval>,
    frames: Vec<Box<dyn FnOnce()>>,
    failing: HashSet<String>,
    scripts: Vec<String>,
}

/// Scriptable fake browser. Clones share state.
#[derive(Clone, Default)]
pub struct MockHost {
    state: Rc<RefCell<MockState>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_agent(self, user_agent: impl Into<String>) -> Self {
        self.state.borrow_mut().user_agent = user_agent.into();
        self
    }

    pub fn with_location(self, href: &str) -> Self {
        self.state.borrow_mut().location = Location::from_href(href);
        self
    }

    pub fn with_scroll_y(self, y: f64) -> Self {
        self.state.borrow_mut().scroll_y = y;
        self
    }

    /// Make loads of `src` (script or image) fail.
    pub fn with_failing_resource(self, src: impl Into<String>) -> Self {
        self.state.borrow_mut().failing.insert(src.into());
        self
    }

    /// Navigations in the order they happened.
    pub fn navigations(&self) -> Vec<Navigation> {
        self.state.borrow().navigations.clone()
    }

    /// Every offset passed to `scroll_to`, in order.
    pub fn scroll_history(&self) -> Vec<f64> {
        self.state.borrow().scroll_history.clone()
    }

    /// Scripts that were successfully inserted.
    pub fn scripts(&self) -> Vec<String> {
        self.state.borrow().scripts.clone()
    }

    pub fn active_intervals(&self) -> usize {
        self.state.borrow().intervals.len()
    }

    /// Period of a live interval.
    pub fn interval_ms(&self, id: TimerId) -> Option<u32> {
        self.state.borrow().intervals.get(&id).map(|i| i.interval_ms)
    }

    /// Fire every live interval once. Returns how many fired.
    pub fn tick_intervals(&self) -> usize {
        let ids: Vec<TimerId> = self.state.borrow().intervals.keys().copied().collect();
        let mut fired = 0;

        for id in ids {
            let tick = self
                .state
                .borrow_mut()
                .intervals
                .get_mut(&id)
                .and_then(|interval| interval.tick.take());

            if let Some(mut tick) = tick {
                tick();
                fired += 1;
                // Put it back unless the tick cleared its own timer
                if let Some(interval) = self.state.borrow_mut().intervals.get_mut(&id) {
                    interval.tick = Some(tick);
                }
            }
        }

        fired
    }

    pub fn pending_frames(&self) -> usize {
        self.state.borrow().frames.len()
    }

    /// Run the frames queued so far. Frames they request wait for the next call.
    pub fn run_frame(&self) -> usize {
        let frames = std::mem::take(&mut self.state.borrow_mut().frames);
        let count = frames.len();
        for frame in frames {
            frame();
        }
        count
    }

    /// Run frames until none are pending or `limit` rounds have passed.
    /// Returns the number of rounds run.
    pub fn run_all_frames(&self, limit: usize) -> usize {
        let mut rounds = 0;
        while rounds < limit && self.run_frame() > 0 {
            rounds += 1;
        }
        rounds
    }

    fn navigate_to(&self, url: &str) {
        let mut state = self.state.borrow_mut();
        let mut next = Location::from_href(url);
        if next.origin.is_empty() {
            next.origin = state.location.origin.clone();
        }
        state.location = next;
    }

    fn is_failing(&self, src: &str) -> bool {
        self.state.borrow().failing.contains(src)
    }
}

impl Host for MockHost {
    type Image = String;

    fn user_agent(&self) -> String {
        self.state.borrow().user_agent.clone()
    }

    fn location(&self) -> Location {
        self.state.borrow().location.clone()
    }

    fn set_hash(&self, hash: &str) {
        let mut state = self.state.borrow_mut();
        state.location.hash = hash.to_string();
        state.navigations.push(Navigation::SetHash(hash.to_string()));
    }

    fn assign(&self, url: &str) {
        self.navigate_to(url);
        self.state
            .borrow_mut()
            .navigations
            .push(Navigation::Assign(url.to_string()));
    }

    fn replace(&self, url: &str) {
        self.navigate_to(url);
        self.state
            .borrow_mut()
            .navigations
            .push(Navigation::Replace(url.to_string()));
    }

    fn scroll_y(&self) -> f64 {
        self.state.borrow().scroll_y
    }

    fn scroll_to(&self, y: f64) {
        let mut state = self.state.borrow_mut();
        state.scroll_y = y;
        state.scroll_history.push(y);
    }

    fn set_interval(&self, interval_ms: u32, tick: Box<dyn FnMut()>) -> TimerId {
        let mut state = self.state.borrow_mut();
        state.next_timer += 1;
        let id = TimerId(state.next_timer);
        state.intervals.insert(
            id,
            Interval {
                interval_ms,
                tick: Some(tick),
            },
        );
        id
    }

    fn clear_interval(&self, id: TimerId) {
        self.state.borrow_mut().intervals.remove(&id);
    }

    fn request_animation_frame(&self, frame: Box<dyn FnOnce()>) {
        self.state.borrow_mut().frames.push(frame);
    }

    fn insert_script(&self, src: &str) -> impl Future<Output = Result<(), LoadError>> + 'static {
        let result = if self.is_failing(src) {
            Err(LoadError::Script {
                src: src.to_string(),
            })
        } else {
            self.state.borrow_mut().scripts.push(src.to_string());
            Ok(())
        };
        ready(result)
    }

    fn load_image(&self, src: &str) -> impl Future<Output = Result<String, LoadError>> + 'static {
        let result = if self.is_failing(src) {
            Err(LoadError::Image {
                src: src.to_string(),
                event: "error".to_string(),
            })
        } else {
            Ok(src.to_string())
        };
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_interval_can_clear_itself() {
        let host = MockHost::new();
        let fired = Rc::new(Cell::new(0));
        let id_slot: Rc<Cell<Option<TimerId>>> = Rc::new(Cell::new(None));

        let id = {
            let ticker = host.clone();
            let fired = fired.clone();
            let id_slot = id_slot.clone();
            host.set_interval(
                100,
                Box::new(move || {
                    fired.set(fired.get() + 1);
                    if let Some(id) = id_slot.get() {
                        ticker.clear_interval(id);
                    }
                }),
            )
        };
        id_slot.set(Some(id));

        assert_eq!(host.interval_ms(id), Some(100));
        assert_eq!(host.tick_intervals(), 1);
        assert_eq!(host.active_intervals(), 0);
        assert_eq!(host.tick_intervals(), 0);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_frames_run_in_rounds() {
        let host = MockHost::new();
        let inner = host.clone();
        host.request_animation_frame(Box::new(move || {
            inner.request_animation_frame(Box::new(|| {}));
        }));

        assert_eq!(host.run_frame(), 1);
        assert_eq!(host.pending_frames(), 1);
        assert_eq!(host.run_all_frames(10), 1);
        assert_eq!(host.pending_frames(), 0);
    }

    #[test]
    fn test_navigation_updates_location() {
        let host = MockHost::new().with_location("https://m.example.com/home");
        host.replace("/login?next=1");

        let location = host.location();
        assert_eq!(location.origin, "https://m.example.com");
        assert_eq!(location.pathname, "/login");
        assert_eq!(
            host.navigations(),
            vec![Navigation::Replace("/login?next=1".to_string())]
        );
    }
}
