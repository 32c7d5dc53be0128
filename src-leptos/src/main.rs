//! GCT Page Load - Leptos demo
//!
//! Mounts a page of placeholder cards, then boots the preloader and
//! skeleton loader against it.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use console_error_panic_hook as _;
use console_log as _;
use gct_pageload_core as _;
use getrandom as _;
use gloo_timers as _;
use js_sys as _;
use serde_wasm_bindgen as _;
use wasm_bindgen as _;
use web_sys as _;

use gct_pageload_types::PageLoadConfig;
use gct_pageload_web::app::App;
use gct_pageload_web::bootstrap::{init_logging, PageLoad};
use leptos::prelude::*;

fn main() {
    init_logging();

    log::info!("GCT page loader {} starting...", env!("GIT_VERSION"));

    // Mount first so the placeholders exist when the observer scans for them
    mount_to_body(App);

    match PageLoad::boot(PageLoadConfig::default()) {
        Ok(page) => {
            if let Err(e) = page.publish() {
                log::warn!("Could not publish page loader globals: {}", e);
            }
            page.keep_alive();
        },
        Err(e) => log::error!("Page loader failed to start: {}", e),
    }
}
