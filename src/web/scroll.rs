//! Animated window scrolling.
//!
//! Time advances a fixed 1/60 s per animation frame rather than being
//! measured, and the duration is derived from distance and speed, clamped
//! to 0.1-0.8 s.

use std::cell::{Cell, RefCell};
use std::f64::consts::PI;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::str::FromStr;
use std::task::{Context, Poll, Waker};

use crate::config::scroll::{
    DEFAULT_SPEED, DEFAULT_TARGET_Y, FRAME_STEP_SECS, MAX_DURATION_SECS, MIN_DURATION_SECS,
};
use crate::core::error::ScrollError;
use crate::host::Host;

// =============================================================================
// Easing
// =============================================================================

/// Easing equation mapping progress in `[0, 1]` to eased progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    EaseOutSine,
    EaseInOutSine,
    EaseInOutQuint,
}

impl Easing {
    pub fn apply(&self, pos: f64) -> f64 {
        match self {
            Self::EaseOutSine => (pos * (PI / 2.0)).sin(),
            Self::EaseInOutSine => -0.5 * ((PI * pos).cos() - 1.0),
            Self::EaseInOutQuint => {
                let pos = pos / 0.5;
                if pos < 1.0 {
                    0.5 * pos.powi(5)
                } else {
                    0.5 * ((pos - 2.0).powi(5) + 2.0)
                }
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::EaseOutSine => "easeOutSine",
            Self::EaseInOutSine => "easeInOutSine",
            Self::EaseInOutQuint => "easeInOutQuint",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = ScrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easeOutSine" => Ok(Self::EaseOutSine),
            "easeInOutSine" => Ok(Self::EaseInOutSine),
            "easeInOutQuint" => Ok(Self::EaseInOutQuint),
            other => Err(ScrollError::UnknownEasing(other.to_string())),
        }
    }
}

// =============================================================================
// Animation
// =============================================================================

/// Parameters for [`scroll_to_y`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollOptions {
    /// Destination scroll offset.
    pub target_y: f64,
    /// Pixels per second.
    pub speed: f64,
    pub easing: Easing,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            target_y: DEFAULT_TARGET_Y,
            speed: DEFAULT_SPEED,
            easing: Easing::default(),
        }
    }
}

/// Animation duration in seconds for a scroll of `distance` pixels.
pub fn scroll_duration(distance: f64, speed: f64) -> f64 {
    (distance.abs() / speed).clamp(MIN_DURATION_SECS, MAX_DURATION_SECS)
}

#[derive(Default)]
struct Completion {
    done: Cell<bool>,
    waker: RefCell<Option<Waker>>,
}

impl Completion {
    fn finish(&self) {
        self.done.set(true);
        if let Some(waker) = self.waker.borrow_mut().take() {
            waker.wake();
        }
    }
}

/// A running scroll animation. Resolves after the final jump to the target.
///
/// There is no way to cancel it; dropping the future leaves it running.
pub struct ScrollAnimation {
    completion: Rc<Completion>,
}

impl ScrollAnimation {
    pub fn is_finished(&self) -> bool {
        self.completion.done.get()
    }
}

impl Future for ScrollAnimation {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.completion.done.get() {
            Poll::Ready(())
        } else {
            *self.completion.waker.borrow_mut() = Some(cx.waker().clone());
            Poll::Pending
        }
    }
}

struct ScrollState {
    start_y: f64,
    target_y: f64,
    duration: f64,
    easing: Easing,
    elapsed: Cell<f64>,
    completion: Rc<Completion>,
}

/// Smoothly scroll the window to `options.target_y`.
///
/// The first frame is computed synchronously; the rest run on the host's
/// animation-frame scheduler.
pub fn scroll_to_y<H>(host: &H, options: ScrollOptions) -> ScrollAnimation
where
    H: Host + Clone + 'static,
{
    let start_y = host.scroll_y();
    let completion = Rc::new(Completion::default());

    let state = Rc::new(ScrollState {
        start_y,
        target_y: options.target_y,
        duration: scroll_duration(start_y - options.target_y, options.speed),
        easing: options.easing,
        elapsed: Cell::new(0.0),
        completion: Rc::clone(&completion),
    });

    tick(host.clone(), state);

    ScrollAnimation { completion }
}

fn tick<H>(host: H, state: Rc<ScrollState>)
where
    H: Host + Clone + 'static,
{
    let elapsed = state.elapsed.get() + FRAME_STEP_SECS;
    state.elapsed.set(elapsed);

    let progress = elapsed / state.duration;
    let eased = state.easing.apply(progress);

    if progress < 1.0 {
        let next_host = host.clone();
        let next_state = Rc::clone(&state);
        host.request_animation_frame(Box::new(move || tick(next_host, next_state)));

        host.scroll_to(state.start_y + (state.target_y - state.start_y) * eased);
    } else {
        host.scroll_to(state.target_y);
        state.completion.finish();
    }
}
