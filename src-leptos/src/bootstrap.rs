//! Page bootstrap
//!
//! Builds both managers as soon as the module runs (so the preloader's start
//! time is the script's start time) and initializes them once the document
//! has been parsed.

use gct_pageload_types::{DomError, PageLoadConfig, PageLoadError};
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document};

use crate::bindings::{PreloaderHandle, SkeletonHandle};
use crate::dom::{self, js_error};
use crate::preloader::PreloaderManager;
use crate::skeleton::SkeletonManager;

/// Global names external scripts use to reach the managers.
pub const PRELOADER_GLOBAL: &str = "GCTPreloader";
pub const SKELETON_GLOBAL: &str = "GCTSkeleton";

/// Install the panic hook and console logger. Safe to call repeatedly.
pub fn init_logging() {
    console_error_panic_hook::set_once();

    // Ignore error if already initialized
    drop(console_log::init_with_level(log::Level::Debug));
}

/// Both page-load components, constructed together and passed around by value.
#[derive(Clone)]
pub struct PageLoad {
    pub preloader: PreloaderManager,
    pub skeleton: SkeletonManager,
}

impl PageLoad {
    pub fn new(config: PageLoadConfig) -> Result<Self, PageLoadError> {
        config.validate()?;
        Ok(Self {
            preloader: PreloaderManager::new(config.preloader),
            skeleton: SkeletonManager::new(config.skeleton),
        })
    }

    /// Construct now, initialize when the DOM is ready.
    pub fn boot(config: PageLoadConfig) -> Result<Self, PageLoadError> {
        let page = Self::new(config)?;
        let document = dom::document()?;
        let ready = page.clone();
        on_dom_ready(&document, move |document| {
            if let Err(e) = ready.init(document) {
                log::error!("Page loader init failed: {}", e);
            }
        })?;
        Ok(page)
    }

    pub fn init(&self, document: &Document) -> Result<(), PageLoadError> {
        self.preloader.init(document)?;
        let observed = self.skeleton.init(document)?;
        log::info!("Page loader ready ({} skeletons observed)", observed);
        Ok(())
    }

    /// Expose JS handles as `window.GCTPreloader` / `window.GCTSkeleton`.
    ///
    /// Rust callers should keep using the instances they were given.
    pub fn publish(&self) -> Result<(), DomError> {
        let window = dom::window()?;
        let preloader = JsValue::from(PreloaderHandle::from(self.preloader.clone()));
        let skeleton = JsValue::from(SkeletonHandle::from(self.skeleton.clone()));
        Reflect::set(&window, &JsValue::from_str(PRELOADER_GLOBAL), &preloader)
            .map_err(js_error)?;
        Reflect::set(&window, &JsValue::from_str(SKELETON_GLOBAL), &skeleton)
            .map_err(js_error)?;
        Ok(())
    }

    /// Keep the managers (and their timers and observers) alive for the
    /// rest of the page's life.
    pub fn keep_alive(self) {
        std::mem::forget(self);
    }
}

/// Run `f` once the document has been parsed.
///
/// Runs immediately if parsing already finished, otherwise on `DOMContentLoaded`.
pub fn on_dom_ready(
    document: &Document,
    f: impl FnOnce(&Document) + 'static,
) -> Result<(), DomError> {
    if !dom::is_parsing(document) {
        f(document);
        return Ok(());
    }

    let target = document.clone();
    let callback = wasm_bindgen::closure::Closure::once_into_js(move || f(&target));
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    document
        .add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            callback.unchecked_ref(),
            &options,
        )
        .map_err(js_error)
}
