//! Named timer handles

use std::collections::HashMap;

use gct_pageload_core::Timer;
use gloo_timers::callback::{Interval, Timeout};

enum Handle {
    Interval(Interval),
    Timeout(Timeout),
}

/// At most one live browser timer per [`Timer`] name.
///
/// Arming a name replaces (and clears) whatever was armed under it before.
#[derive(Default)]
pub(crate) struct TimerSlots {
    live: HashMap<Timer, Handle>,
}

impl TimerSlots {
    pub fn set_interval(&mut self, timer: Timer, period_ms: u32, callback: impl FnMut() + 'static) {
        self.cancel(timer);
        self.live.insert(timer, Handle::Interval(Interval::new(period_ms, callback)));
    }

    pub fn set_timeout(&mut self, timer: Timer, delay_ms: u32, callback: impl FnOnce() + 'static) {
        self.cancel(timer);
        self.live.insert(timer, Handle::Timeout(Timeout::new(delay_ms, callback)));
    }

    /// Release a one-shot from inside its own callback.
    ///
    /// The handle is forgotten rather than dropped: its closure is the one
    /// currently executing.
    pub fn fired(&mut self, timer: Timer) {
        if !matches!(self.live.get(&timer), Some(Handle::Timeout(_))) {
            return;
        }
        if let Some(Handle::Timeout(timeout)) = self.live.remove(&timer) {
            drop(timeout.forget());
        }
    }

    pub fn cancel(&mut self, timer: Timer) {
        match self.live.remove(&timer) {
            Some(Handle::Interval(interval)) => drop(interval.cancel()),
            Some(Handle::Timeout(timeout)) => drop(timeout.cancel()),
            None => {},
        }
    }

    pub fn clear(&mut self) {
        let names: Vec<Timer> = self.live.keys().copied().collect();
        for timer in names {
            self.cancel(timer);
        }
    }
}
