//! Preloader overlay driver
//!
//! Owns the browser side of the preloader: the overlay element, the window
//! `load` listener, and one gloo timer per [`Timer`] name. Every callback
//! turns into an [`Event`] for the core state machine, and every resulting
//! [`Command`] is applied here.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gct_pageload_core::{Command, Event, Phase, Preloader, Timer};
use gct_pageload_types::{DomError, PreloaderConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::dom::{self, js_error, Overlay};
use crate::timers::TimerSlots;

const LOAD_EVENT: &str = "load";

struct Inner {
    machine: Preloader,
    overlay: Option<Overlay>,
    timers: TimerSlots,
    load_listener: Option<Closure<dyn FnMut()>>,
}

impl Inner {
    fn unbind_load(&mut self) {
        let Some(listener) = self.load_listener.take() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            if let Err(e) = window
                .remove_event_listener_with_callback(LOAD_EVENT, listener.as_ref().unchecked_ref())
            {
                log::debug!("Could not remove load listener: {}", js_error(e));
            }
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.timers.clear();
        self.unbind_load();
    }
}

/// Handle to the page preloader. Clones share the same overlay.
#[derive(Clone)]
pub struct PreloaderManager {
    inner: Rc<RefCell<Inner>>,
}

impl PreloaderManager {
    /// Record the start time. Nothing touches the DOM until [`init`](Self::init).
    pub fn new(config: PreloaderConfig) -> Self {
        Self::from_machine(Preloader::new(config, js_sys::Date::now()))
    }

    pub fn from_machine(machine: Preloader) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                machine,
                overlay: None,
                timers: TimerSlots::default(),
                load_listener: None,
            })),
        }
    }

    /// Locate or create the overlay, bind the load event, arm the fallback
    /// and start simulating progress. Later calls do nothing.
    pub fn init(&self, document: &Document) -> Result<(), DomError> {
        {
            let inner = self.inner.borrow();
            if inner.machine.phase() != Phase::Idle || inner.overlay.is_some() {
                log::debug!("Preloader already initialized");
                return Ok(());
            }
        }

        // Stored only once the listener is bound, so a failed init can be retried.
        let overlay = Overlay::locate_or_create(document)?;
        self.bind_load()?;
        self.inner.borrow_mut().overlay = Some(overlay);
        let commands = self.inner.borrow_mut().machine.start();
        self.apply(commands);

        // `load` never fires again once the document is complete.
        if dom::is_complete(document) {
            self.dispatch(Event::PageLoaded);
        }
        Ok(())
    }

    /// Start hiding now. Safe to call any number of times.
    pub fn hide(&self) {
        self.dispatch(Event::HideRequested);
    }

    pub fn progress(&self) -> f64 {
        self.inner.borrow().machine.progress()
    }

    pub fn is_loaded(&self) -> bool {
        self.inner.borrow().machine.is_loaded()
    }

    pub fn phase(&self) -> Phase {
        self.inner.borrow().machine.phase()
    }

    pub fn overlay(&self) -> Option<Overlay> {
        self.inner.borrow().overlay.clone()
    }

    fn bind_load(&self) -> Result<(), DomError> {
        let window = dom::window()?;
        let weak = Rc::downgrade(&self.inner);
        let listener = Closure::<dyn FnMut()>::new(move || {
            if let Some(manager) = Self::upgrade(&weak) {
                manager.dispatch(Event::PageLoaded);
            }
        });
        window
            .add_event_listener_with_callback(LOAD_EVENT, listener.as_ref().unchecked_ref())
            .map_err(js_error)?;
        self.inner.borrow_mut().load_listener = Some(listener);
        Ok(())
    }

    fn upgrade(weak: &Weak<RefCell<Inner>>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    fn on_timer(weak: &Weak<RefCell<Inner>>, timer: Timer) {
        let Some(manager) = Self::upgrade(weak) else {
            return;
        };
        manager.inner.borrow_mut().timers.fired(timer);
        manager.dispatch(Event::TimerFired(timer));
    }

    fn dispatch(&self, event: Event) {
        let commands = self.inner.borrow_mut().machine.handle(event, js_sys::Date::now());
        self.apply(commands);
    }

    fn apply(&self, commands: Vec<Command>) {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        for command in commands {
            match command {
                Command::SetProgress(percent) => {
                    if let Some(overlay) = &inner.overlay {
                        overlay.set_progress(percent);
                    }
                },
                Command::StartInterval { timer, period_ms } => {
                    let weak = Rc::downgrade(&self.inner);
                    inner.timers.set_interval(timer, period_ms, move || Self::on_timer(&weak, timer));
                },
                Command::StartTimeout { timer, delay_ms } => {
                    let weak = Rc::downgrade(&self.inner);
                    inner.timers.set_timeout(timer, delay_ms, move || Self::on_timer(&weak, timer));
                },
                Command::Cancel(timer) => inner.timers.cancel(timer),
                Command::MarkLoaded => {
                    if let Some(overlay) = &inner.overlay {
                        overlay.mark_loaded();
                    }
                },
                Command::RemoveOverlay => {
                    if let Some(overlay) = inner.overlay.take() {
                        overlay.remove();
                    }
                    inner.timers.clear();
                    inner.unbind_load();
                    log::info!("Preloader removed");
                },
            }
        }
    }
}
