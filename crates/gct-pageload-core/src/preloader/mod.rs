//! Page preloader lifecycle
//!
//! Drives the overlay from first paint to removal:
//!
//! - Idle: constructed, start time recorded
//! - Simulating: progress ticks every 100ms toward 90%, fallback armed
//! - LoadSignaled: window load seen, waiting out the minimum display time
//! - Completing: bar at 100%, `loaded` class applied, fade running
//! - Removed: overlay detached
//!
//! The load path and the fallback path race. Whichever reaches [`Preloader`]
//! first flips `loaded` and cancels the other's timer in the same batch of
//! commands.

mod progress;
mod state;

#[cfg(test)]
mod tests;

pub use progress::ProgressSimulator;
pub use state::{
    Command, Event, Phase, Timer, COMPLETION_DELAY_MS, PROGRESS_CEILING, PROGRESS_COMPLETE,
    TICK_INTERVAL_MS,
};

use gct_pageload_types::PreloaderConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

/// Preloader state machine.
///
/// Timestamps are milliseconds on whatever clock the driver uses
/// (`Date.now()` in the browser, a virtual clock in tests).
#[derive(Debug)]
pub struct Preloader<R = StdRng> {
    config: PreloaderConfig,
    started_at: f64,
    phase: Phase,
    loaded: bool,
    fading: bool,
    progress: ProgressSimulator<R>,
}

impl Preloader<StdRng> {
    /// Create a preloader with an entropy-seeded progress curve.
    pub fn new(config: PreloaderConfig, started_at: f64) -> Self {
        Self::with_rng(config, started_at, StdRng::from_entropy())
    }
}

impl<R: Rng> Preloader<R> {
    /// Create a preloader with a caller-supplied random source.
    ///
    /// Pass a seeded RNG for a reproducible progress curve.
    pub fn with_rng(config: PreloaderConfig, started_at: f64, rng: R) -> Self {
        Self {
            config,
            started_at,
            phase: Phase::Idle,
            loaded: false,
            fading: false,
            progress: ProgressSimulator::new(rng),
        }
    }

    pub fn config(&self) -> &PreloaderConfig {
        &self.config
    }

    pub fn started_at(&self) -> f64 {
        self.started_at
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn progress(&self) -> f64 {
        self.progress.progress()
    }

    /// True once a hide has begun. Never reverts.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Begin simulating progress and arm the fallback timer.
    ///
    /// Only the first call does anything.
    pub fn start(&mut self) -> Vec<Command> {
        if self.phase != Phase::Idle {
            debug!(phase = %self.phase, "Preloader already started");
            return Vec::new();
        }
        self.phase = Phase::Simulating;
        info!(
            min_load_ms = self.config.min_load_time,
            max_load_ms = self.config.max_load_time,
            "Preloader started"
        );
        vec![
            Command::StartInterval { timer: Timer::Progress, period_ms: TICK_INTERVAL_MS },
            Command::StartTimeout { timer: Timer::MaxLoad, delay_ms: self.config.max_load_time },
        ]
    }

    /// Feed one event observed at `now_ms`.
    pub fn handle(&mut self, event: Event, now_ms: f64) -> Vec<Command> {
        match event {
            Event::PageLoaded => self.on_page_load(now_ms),
            Event::TimerFired(Timer::Progress) => self.on_tick(),
            Event::TimerFired(Timer::MinDisplay) | Event::HideRequested => self.hide(),
            Event::TimerFired(Timer::MaxLoad) => {
                if !self.loaded {
                    warn!(
                        max_load_ms = self.config.max_load_time,
                        "Load event did not arrive in time, forcing hide"
                    );
                }
                self.hide()
            },
            Event::TimerFired(Timer::Completion) => self.on_bar_filled(),
            Event::TimerFired(Timer::FadeOut) => self.on_faded(),
        }
    }

    fn on_tick(&mut self) -> Vec<Command> {
        if self.loaded || !matches!(self.phase, Phase::Simulating | Phase::LoadSignaled) {
            return Vec::new();
        }
        vec![Command::SetProgress(self.progress.step())]
    }

    fn on_page_load(&mut self, now_ms: f64) -> Vec<Command> {
        if self.loaded || self.phase != Phase::Simulating {
            debug!(phase = %self.phase, "Ignoring load signal");
            return Vec::new();
        }
        let elapsed = (now_ms - self.started_at).max(0.0);
        let remaining = (f64::from(self.config.min_load_time) - elapsed).max(0.0);
        let delay_ms = remaining.ceil() as u32;
        self.phase = Phase::LoadSignaled;
        debug!(elapsed_ms = elapsed, delay_ms, "Page loaded");
        vec![Command::StartTimeout { timer: Timer::MinDisplay, delay_ms }]
    }

    /// Start the completion sequence. Idempotent: the first caller wins.
    fn hide(&mut self) -> Vec<Command> {
        if self.phase == Phase::Idle {
            debug!("Hide requested before the overlay exists");
            return Vec::new();
        }
        if self.loaded {
            return Vec::new();
        }
        self.loaded = true;
        self.phase = Phase::Completing;
        self.progress.finish(PROGRESS_COMPLETE);
        info!(progress = PROGRESS_COMPLETE, "Hiding preloader");
        vec![
            Command::Cancel(Timer::Progress),
            Command::Cancel(Timer::MaxLoad),
            Command::Cancel(Timer::MinDisplay),
            Command::SetProgress(PROGRESS_COMPLETE),
            Command::StartTimeout { timer: Timer::Completion, delay_ms: COMPLETION_DELAY_MS },
        ]
    }

    fn on_bar_filled(&mut self) -> Vec<Command> {
        if self.phase != Phase::Completing || self.fading {
            return Vec::new();
        }
        self.fading = true;
        vec![
            Command::MarkLoaded,
            Command::StartTimeout {
                timer: Timer::FadeOut,
                delay_ms: self.config.fade_out_duration,
            },
        ]
    }

    fn on_faded(&mut self) -> Vec<Command> {
        if self.phase != Phase::Completing || !self.fading {
            return Vec::new();
        }
        self.phase = Phase::Removed;
        debug!("Preloader removed");
        vec![Command::RemoveOverlay]
    }
}
