//! Skeleton placeholder observer

use std::cell::RefCell;
use std::rc::Rc;

use gct_pageload_core::{card_skeleton_markup, ContentLoader, NoopContentLoader, SkeletonTracker};
use gct_pageload_types::{DomError, SkeletonConfig};
use js_sys::{Array, Function};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom::{self, js_error};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Content loader backed by a JS function called with the placeholder element.
pub struct JsContentLoader(Function);

impl JsContentLoader {
    pub fn new(callback: Function) -> Self {
        Self(callback)
    }
}

impl ContentLoader<Element> for JsContentLoader {
    fn load_content(&self, skeleton: &Element) {
        if let Err(e) = self.0.call1(&JsValue::NULL, skeleton) {
            log::warn!("Content loader threw: {}", js_error(e));
        }
    }
}

struct Inner {
    tracker: SkeletonTracker<Element>,
    loader: Rc<dyn ContentLoader<Element>>,
    observer: Option<IntersectionObserver>,
    _callback: Option<ObserverCallback>,
    initialized: bool,
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

/// Watches placeholder cards and fires the content loader once per card.
#[derive(Clone)]
pub struct SkeletonManager {
    config: Rc<SkeletonConfig>,
    inner: Rc<RefCell<Inner>>,
}

impl SkeletonManager {
    pub fn new(config: SkeletonConfig) -> Self {
        Self::with_loader(config, NoopContentLoader)
    }

    pub fn with_loader(config: SkeletonConfig, loader: impl ContentLoader<Element> + 'static) -> Self {
        Self {
            config: Rc::new(config),
            inner: Rc::new(RefCell::new(Inner {
                tracker: SkeletonTracker::new(),
                loader: Rc::new(loader),
                observer: None,
                _callback: None,
                initialized: false,
            })),
        }
    }

    /// Replace the content loader. Applies to placeholders revealed afterwards.
    pub fn set_content_loader(&self, loader: impl ContentLoader<Element> + 'static) {
        self.inner.borrow_mut().loader = Rc::new(loader);
    }

    /// Observe every placeholder currently in the document.
    ///
    /// Returns how many are being watched. Runs once; later calls report the
    /// current count without rescanning.
    pub fn init(&self, document: &Document) -> Result<usize, DomError> {
        if self.inner.borrow().initialized {
            return Ok(self.pending());
        }

        let weak = Rc::downgrade(&self.inner);
        let callback: ObserverCallback =
            Closure::new(move |entries: Array, observer: IntersectionObserver| {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                let reports = entries.iter().map(|entry| {
                    let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                    (entry.target(), entry.is_intersecting())
                });
                // Run the loader after releasing the borrow so it may call back in.
                let (revealed, loader) = {
                    let mut inner = inner.borrow_mut();
                    let revealed = inner.tracker.reveal(reports, &NoopContentLoader);
                    (revealed, Rc::clone(&inner.loader))
                };
                for skeleton in revealed {
                    loader.load_content(&skeleton);
                    observer.unobserve(&skeleton);
                }
            });

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&self.config.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(js_error)?;

        let mut inner = self.inner.borrow_mut();
        for element in dom::query_all(document, &self.config.selector)? {
            if inner.tracker.observe(element.clone()) {
                observer.observe(&element);
            }
        }
        let pending = inner.tracker.pending();
        inner.observer = Some(observer);
        inner._callback = Some(callback);
        inner.initialized = true;
        log::debug!("Observing {} skeleton placeholders", pending);
        Ok(pending)
    }

    /// Placeholders not yet revealed.
    pub fn pending(&self) -> usize {
        self.inner.borrow().tracker.pending()
    }

    /// Stop watching all remaining placeholders without loading them.
    pub fn disconnect(&self) {
        let mut inner = self.inner.borrow_mut();
        if let Some(observer) = inner.observer.take() {
            observer.disconnect();
        }
        let dropped = inner.tracker.clear();
        log::debug!("Skeleton observer disconnected ({} pending)", dropped.len());
    }

    /// Markup for one standard placeholder card.
    pub fn card_skeleton(&self) -> String {
        card_skeleton_markup()
    }
}
