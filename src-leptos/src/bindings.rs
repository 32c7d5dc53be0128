//! JavaScript API
//!
//! For static pages that load the module directly instead of through the
//! Leptos binary:
//!
//! ```js
//! import init, { boot } from "./gct_pageload_web.js";
//! await init();
//! const page = boot({ preloader: { minLoadTime: 800 } });
//! page.skeleton.setContentLoader((el) => hydrateCard(el));
//! ```

use std::cell::OnceCell;

use gct_pageload_types::{ConfigError, PageLoadConfig, PageLoadError};
use js_sys::Function;
use wasm_bindgen::prelude::*;

use crate::bootstrap::{init_logging, PageLoad};
use crate::preloader::PreloaderManager;
use crate::skeleton::{JsContentLoader, SkeletonManager};

thread_local! {
    // Owns the booted page for the rest of its life.
    static BOOTED: OnceCell<PageLoad> = const { OnceCell::new() };
}

fn to_js(err: PageLoadError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Boot the preloader and skeleton loader.
///
/// `config` is an optional plain object shaped like `PageLoadConfig`
/// (camelCase keys); omitted fields use the defaults. Only the first
/// successful call boots; later calls return the same page and ignore
/// their config.
#[wasm_bindgen]
pub fn boot(config: JsValue) -> Result<PageLoadHandle, JsValue> {
    init_logging();

    if let Some(page) = BOOTED.with(|cell| cell.get().cloned()) {
        log::debug!("Page loader already booted");
        return Ok(PageLoadHandle { page });
    }

    let config = if config.is_undefined() || config.is_null() {
        PageLoadConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| PageLoadError::from(ConfigError::ParseError { message: e.to_string() }))
            .map_err(to_js)?
    };

    let page = PageLoad::boot(config).map_err(to_js)?;
    let page = BOOTED.with(|cell| cell.get_or_init(|| page).clone());
    Ok(PageLoadHandle { page })
}

#[wasm_bindgen(js_name = PageLoad)]
pub struct PageLoadHandle {
    page: PageLoad,
}

#[wasm_bindgen(js_class = PageLoad)]
impl PageLoadHandle {
    #[wasm_bindgen(getter)]
    pub fn preloader(&self) -> PreloaderHandle {
        PreloaderHandle::from(self.page.preloader.clone())
    }

    #[wasm_bindgen(getter)]
    pub fn skeleton(&self) -> SkeletonHandle {
        SkeletonHandle::from(self.page.skeleton.clone())
    }
}

#[wasm_bindgen(js_name = Preloader)]
pub struct PreloaderHandle {
    manager: PreloaderManager,
}

impl From<PreloaderManager> for PreloaderHandle {
    fn from(manager: PreloaderManager) -> Self {
        Self { manager }
    }
}

#[wasm_bindgen(js_class = Preloader)]
impl PreloaderHandle {
    /// Force the overlay to complete and fade out.
    pub fn hide(&self) {
        self.manager.hide();
    }

    #[wasm_bindgen(getter)]
    pub fn progress(&self) -> f64 {
        self.manager.progress()
    }

    #[wasm_bindgen(getter, js_name = isLoaded)]
    pub fn is_loaded(&self) -> bool {
        self.manager.is_loaded()
    }

    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> String {
        self.manager.phase().to_string()
    }
}

#[wasm_bindgen(js_name = Skeleton)]
pub struct SkeletonHandle {
    manager: SkeletonManager,
}

impl From<SkeletonManager> for SkeletonHandle {
    fn from(manager: SkeletonManager) -> Self {
        Self { manager }
    }
}

#[wasm_bindgen(js_class = Skeleton)]
impl SkeletonHandle {
    #[wasm_bindgen(js_name = createCardSkeleton)]
    pub fn create_card_skeleton(&self) -> String {
        self.manager.card_skeleton()
    }

    /// Called with each placeholder element as it becomes visible.
    #[wasm_bindgen(js_name = setContentLoader)]
    pub fn set_content_loader(&self, callback: Function) {
        self.manager.set_content_loader(JsContentLoader::new(callback));
    }

    #[wasm_bindgen(getter)]
    pub fn pending(&self) -> usize {
        self.manager.pending()
    }

    pub fn disconnect(&self) {
        self.manager.disconnect();
    }
}
