//! GCT Page Load - WASM frontend library
//!
//! Browser driver for the page preloader overlay and the skeleton
//! placeholder loader, plus Leptos components that render the matching
//! markup.

pub mod app;
pub mod bindings;
pub mod bootstrap;
pub mod components;
pub mod dom;
pub mod preloader;
pub mod skeleton;

mod timers;
