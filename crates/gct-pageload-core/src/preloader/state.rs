//! Preloader lifecycle types

use std::fmt;

/// Interval between simulated progress steps.
pub const TICK_INTERVAL_MS: u32 = 100;

/// Pause after the bar reaches 100% before the fade starts.
pub const COMPLETION_DELAY_MS: u32 = 200;

/// Highest value the simulated progress may reach before the real load.
pub const PROGRESS_CEILING: f64 = 90.0;

pub const PROGRESS_COMPLETE: f64 = 100.0;

/// Lifecycle of the overlay. `Removed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Constructed, overlay not located yet
    #[default]
    Idle,
    /// Overlay visible, progress ticking
    Simulating,
    /// Load event seen, waiting out the minimum display time
    LoadSignaled,
    /// Bar filled, fading out
    Completing,
    /// Overlay detached from the document
    Removed,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Simulating => "simulating",
            Self::LoadSignaled => "load-signaled",
            Self::Completing => "completing",
            Self::Removed => "removed",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named timers. The driver keeps at most one live handle per name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    /// Periodic progress step
    Progress,
    /// Fallback that forces the hide
    MaxLoad,
    /// Remaining minimum display time after the load event
    MinDisplay,
    /// Bar fill animation before the `loaded` class
    Completion,
    /// CSS fade before the overlay is removed
    FadeOut,
}

/// Inputs to the preloader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Window `load` fired (or had already fired at init)
    PageLoaded,
    /// A timer armed by a previous command elapsed
    TimerFired(Timer),
    /// External caller asked for the overlay to go away now
    HideRequested,
}

/// Effects for the driver to apply, in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Write the bar width as a percentage
    SetProgress(f64),
    StartInterval { timer: Timer, period_ms: u32 },
    StartTimeout { timer: Timer, delay_ms: u32 },
    Cancel(Timer),
    /// Add the `loaded` class to the overlay
    MarkLoaded,
    /// Detach the overlay and release its listeners
    RemoveOverlay,
}
