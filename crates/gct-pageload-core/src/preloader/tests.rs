use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Replays preloader commands against a virtual clock.
struct Harness {
    preloader: Preloader<StdRng>,
    now: f64,
    // Vec keeps firing order stable for timers due at the same instant.
    timers: Vec<(Timer, f64, Option<u32>)>,
    log: Vec<(f64, Command)>,
}

impl Harness {
    fn new(config: PreloaderConfig) -> Self {
        Self {
            preloader: Preloader::with_rng(config, 0.0, StdRng::seed_from_u64(0xC0FFEE)),
            now: 0.0,
            timers: Vec::new(),
            log: Vec::new(),
        }
    }

    fn started() -> Self {
        let mut harness = Self::new(PreloaderConfig::default());
        let commands = harness.preloader.start();
        harness.apply(commands);
        harness
    }

    fn apply(&mut self, commands: Vec<Command>) {
        for command in commands {
            match command {
                Command::StartInterval { timer, period_ms } => {
                    self.arm(timer, f64::from(period_ms), Some(period_ms));
                },
                Command::StartTimeout { timer, delay_ms } => {
                    self.arm(timer, f64::from(delay_ms), None);
                },
                Command::Cancel(timer) => self.timers.retain(|(t, _, _)| *t != timer),
                Command::SetProgress(_) | Command::MarkLoaded | Command::RemoveOverlay => {},
            }
            self.log.push((self.now, command));
        }
    }

    fn arm(&mut self, timer: Timer, delay: f64, period: Option<u32>) {
        let due = self.now + delay;
        match self.timers.iter_mut().find(|(t, _, _)| *t == timer) {
            Some(slot) => *slot = (timer, due, period),
            None => self.timers.push((timer, due, period)),
        }
    }

    fn dispatch(&mut self, event: Event) {
        let commands = self.preloader.handle(event, self.now);
        self.apply(commands);
    }

    fn advance_to(&mut self, until: f64) {
        loop {
            let next = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, (_, due, _))| *due <= until)
                .min_by(|(ia, (_, a, _)), (ib, (_, b, _))| a.total_cmp(b).then(ia.cmp(ib)))
                .map(|(index, entry)| (index, *entry));
            let Some((index, (timer, due, period))) = next else {
                break;
            };
            self.now = due;
            match period {
                Some(period) => self.timers[index].1 = due + f64::from(period),
                None => {
                    self.timers.remove(index);
                },
            }
            self.dispatch(Event::TimerFired(timer));
        }
        self.now = until;
    }

    fn first(&self, wanted: impl Fn(&Command) -> bool) -> Option<f64> {
        self.log.iter().find(|(_, c)| wanted(c)).map(|(at, _)| *at)
    }

    fn count(&self, wanted: impl Fn(&Command) -> bool) -> usize {
        self.log.iter().filter(|(_, c)| wanted(c)).count()
    }

    fn hide_started_at(&self) -> Option<f64> {
        self.first(|c| *c == Command::SetProgress(PROGRESS_COMPLETE))
    }

    fn is_armed(&self, timer: Timer) -> bool {
        self.timers.iter().any(|(t, _, _)| *t == timer)
    }
}

#[test]
fn test_start_arms_progress_and_fallback() {
    let harness = Harness::started();

    assert_eq!(harness.preloader.phase(), Phase::Simulating);
    assert!(harness.is_armed(Timer::Progress));
    assert!(harness.is_armed(Timer::MaxLoad));
    assert_eq!(
        harness.log.iter().map(|(_, c)| *c).collect::<Vec<_>>(),
        vec![
            Command::StartInterval { timer: Timer::Progress, period_ms: 100 },
            Command::StartTimeout { timer: Timer::MaxLoad, delay_ms: 5000 },
        ]
    );
}

#[test]
fn test_start_twice_is_noop() {
    let mut harness = Harness::started();
    assert!(harness.preloader.start().is_empty());
}

#[test]
fn test_progress_monotonic_and_capped_before_load() {
    let mut harness = Harness::started();
    harness.advance_to(4900.0);

    let values: Vec<f64> = harness
        .log
        .iter()
        .filter_map(|(_, c)| match c {
            Command::SetProgress(p) => Some(*p),
            _ => None,
        })
        .collect();

    assert_eq!(values.len(), 49);
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
    assert!(values.iter().all(|p| *p <= PROGRESS_CEILING));
    assert!(!harness.preloader.is_loaded());
}

#[test]
fn test_load_at_start_waits_for_min_display() {
    let mut harness = Harness::started();
    harness.dispatch(Event::PageLoaded);
    assert_eq!(harness.preloader.phase(), Phase::LoadSignaled);

    harness.advance_to(499.0);
    assert!(harness.hide_started_at().is_none());

    harness.advance_to(1000.0);
    assert_eq!(harness.hide_started_at(), Some(500.0));
}

#[test]
fn test_late_load_hides_immediately() {
    let mut harness = Harness::started();
    harness.advance_to(800.0);
    harness.dispatch(Event::PageLoaded);

    assert!(harness.log.contains(&(
        800.0,
        Command::StartTimeout { timer: Timer::MinDisplay, delay_ms: 0 }
    )));

    harness.advance_to(800.0);
    assert_eq!(harness.hide_started_at(), Some(800.0));
}

#[test]
fn test_fallback_fires_at_max_load_time() {
    let mut harness = Harness::started();
    harness.advance_to(10_000.0);

    assert_eq!(harness.hide_started_at(), Some(5000.0));
    assert_eq!(harness.first(|c| *c == Command::MarkLoaded), Some(5200.0));
    assert_eq!(harness.first(|c| *c == Command::RemoveOverlay), Some(5700.0));
    assert_eq!(harness.preloader.phase(), Phase::Removed);
}

#[test]
fn test_custom_timings() {
    let config = PreloaderConfig { min_load_time: 1000, max_load_time: 2000, fade_out_duration: 300 };
    let mut harness = Harness::new(config);
    let commands = harness.preloader.start();
    harness.apply(commands);
    harness.advance_to(100.0);
    harness.dispatch(Event::PageLoaded);
    harness.advance_to(5000.0);

    assert_eq!(harness.hide_started_at(), Some(1000.0));
    assert_eq!(harness.first(|c| *c == Command::RemoveOverlay), Some(1500.0));
}

#[test]
fn test_repeated_hide_removes_once() {
    let mut harness = Harness::started();
    harness.advance_to(300.0);
    harness.dispatch(Event::HideRequested);
    harness.dispatch(Event::HideRequested);
    harness.advance_to(350.0);
    harness.dispatch(Event::HideRequested);
    harness.advance_to(10_000.0);

    assert_eq!(harness.count(|c| *c == Command::SetProgress(PROGRESS_COMPLETE)), 1);
    assert_eq!(harness.count(|c| *c == Command::MarkLoaded), 1);
    assert_eq!(harness.count(|c| *c == Command::RemoveOverlay), 1);
}

#[test]
fn test_hide_cancels_pending_timers() {
    let mut harness = Harness::started();
    harness.dispatch(Event::PageLoaded);
    harness.advance_to(200.0);
    harness.dispatch(Event::HideRequested);

    assert!(!harness.is_armed(Timer::Progress));
    assert!(!harness.is_armed(Timer::MaxLoad));
    assert!(!harness.is_armed(Timer::MinDisplay));
    assert!(harness.is_armed(Timer::Completion));

    // Nothing but the completion sequence runs afterwards.
    harness.advance_to(10_000.0);
    let after_hide: Vec<Command> =
        harness.log.iter().filter(|(at, _)| *at > 200.0).map(|(_, c)| *c).collect();
    assert_eq!(
        after_hide,
        vec![
            Command::MarkLoaded,
            Command::StartTimeout { timer: Timer::FadeOut, delay_ms: 500 },
            Command::RemoveOverlay,
        ]
    );
}

#[test]
fn test_load_after_forced_hide_is_ignored() {
    let mut harness = Harness::started();
    harness.advance_to(5100.0);
    assert!(harness.preloader.is_loaded());

    harness.dispatch(Event::PageLoaded);
    assert!(!harness.is_armed(Timer::MinDisplay));
    assert_eq!(harness.preloader.phase(), Phase::Completing);
}

#[test]
fn test_hide_before_start_is_noop() {
    let mut harness = Harness::new(PreloaderConfig::default());
    harness.dispatch(Event::HideRequested);

    assert!(harness.log.is_empty());
    assert!(!harness.preloader.is_loaded());
    assert_eq!(harness.preloader.phase(), Phase::Idle);
}

#[test]
fn test_progress_reports_complete_after_hide() {
    let mut harness = Harness::started();
    harness.advance_to(1000.0);
    assert!(harness.preloader.progress() <= PROGRESS_CEILING);

    harness.dispatch(Event::HideRequested);
    assert_eq!(harness.preloader.progress(), PROGRESS_COMPLETE);
}

#[test]
fn test_phase_names() {
    assert_eq!(Phase::Idle.to_string(), "idle");
    assert_eq!(Phase::LoadSignaled.to_string(), "load-signaled");
    assert_eq!(Phase::Removed.as_str(), "removed");
}
