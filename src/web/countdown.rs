//! Countdown timer on top of a repeating host interval.
//!
//! Tick order, per tick:
//! 1. if the count is already `<= 0`, cancel the interval
//! 2. call the callback with the current (not yet decremented) count
//! 3. subtract `step`
//!
//! The first tick runs synchronously before the interval is scheduled, so a
//! countdown from 2 reports 2, 1, 0 and cancels on the tick that reports 0.
//!
//! Counts are `f64` like the JavaScript numbers they come from, so
//! fractional steps count down 2, 1.5, 1, ...

use std::cell::Cell;
use std::rc::Rc;

use crate::config::countdown::{DEFAULT_INTERVAL_MS, DEFAULT_STEP};
use crate::host::{Host, TimerId};

/// Countdown pacing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountDownOptions {
    /// Amount subtracted per tick.
    pub step: f64,
    /// Milliseconds between timed ticks.
    pub interval_ms: u32,
}

impl Default for CountDownOptions {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

/// Cancellation state shared by the tick closure and the [`Subscription`].
struct Timer<H: Host> {
    host: H,
    id: Cell<Option<TimerId>>,
}

impl<H: Host> Timer<H> {
    fn clear(&self) {
        if let Some(id) = self.id.take() {
            self.host.clear_interval(id);
        }
    }
}

/// Handle returned by [`count_down`].
///
/// Dropping it does not stop the countdown; call [`Subscription::unsubscribe`].
pub struct Subscription<H: Host> {
    timer: Rc<Timer<H>>,
}

impl<H: Host> Subscription<H> {
    /// Stop further ticks. Safe to call any number of times.
    pub fn unsubscribe(&self) {
        self.timer.clear();
    }

    /// True while the interval is still scheduled.
    pub fn is_active(&self) -> bool {
        self.timer.id.get().is_some()
    }
}

/// Start a countdown from `count`.
///
/// `callback` receives the count before each tick's decrement.
pub fn count_down<H, C>(
    host: &H,
    count: f64,
    callback: Option<C>,
    options: CountDownOptions,
) -> Subscription<H>
where
    H: Host + Clone + 'static,
    C: FnMut(f64) + 'static,
{
    let timer = Rc::new(Timer {
        host: host.clone(),
        id: Cell::new(None),
    });

    let mut tick = {
        let timer = Rc::clone(&timer);
        let mut count = count;
        let mut callback = callback;
        move || {
            if count <= 0.0 {
                timer.clear();
            }
            if let Some(callback) = callback.as_mut() {
                callback(count);
            }
            count -= options.step;
        }
    };

    tick();

    let id = host.set_interval(options.interval_ms, Box::new(tick));
    timer.id.set(Some(id));

    Subscription { timer }
}
