//! DOM access helpers
//!
//! Lookups that find nothing are not errors. Only a missing browser
//! environment or a throwing DOM call is reported as [`DomError`].

use gct_pageload_types::dom::{
    LOADED_CLASS, OVERLAY_INNER_HTML, PRELOADER_CLASS, PRELOADER_SELECTOR, PROGRESS_BAR_SELECTOR,
};
use gct_pageload_types::DomError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::MissingWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::MissingDocument)
}

/// `document.readyState` while the HTML is still being parsed.
pub const READY_STATE_LOADING: &str = "loading";

/// `document.readyState` once the window `load` event has fired.
pub const READY_STATE_COMPLETE: &str = "complete";

/// True until `DOMContentLoaded`.
pub fn is_parsing(document: &Document) -> bool {
    document.ready_state() == READY_STATE_LOADING
}

/// True once every subresource has loaded.
pub fn is_complete(document: &Document) -> bool {
    document.ready_state() == READY_STATE_COMPLETE
}

/// Convert a thrown JS value into a [`DomError`].
pub fn js_error(value: JsValue) -> DomError {
    let message = value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{:?}", value));
    DomError::Js { message }
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    let nodes = document.query_selector_all(selector).map_err(js_error)?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// The preloader overlay and its progress fill.
#[derive(Debug, Clone)]
pub struct Overlay {
    root: Element,
    bar: Option<HtmlElement>,
    synthesized: bool,
}

impl Overlay {
    /// Reuse the page's `.preloader` if it has one, otherwise build the
    /// default overlay and insert it as the first child of `<body>`.
    pub fn locate_or_create(document: &Document) -> Result<Self, DomError> {
        if let Some(root) = document.query_selector(PRELOADER_SELECTOR).map_err(js_error)? {
            let bar = document
                .query_selector(PROGRESS_BAR_SELECTOR)
                .map_err(js_error)?
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            log::debug!("Using existing preloader (progress bar: {})", bar.is_some());
            return Ok(Self { root, bar, synthesized: false });
        }

        let body = document.body().ok_or(DomError::MissingBody)?;
        let root = document.create_element("div").map_err(js_error)?;
        root.set_class_name(PRELOADER_CLASS);
        root.set_inner_html(OVERLAY_INNER_HTML);
        body.prepend_with_node_1(&root).map_err(js_error)?;

        let bar = root
            .query_selector(PROGRESS_BAR_SELECTOR)
            .map_err(js_error)?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        log::debug!("Synthesized preloader overlay");
        Ok(Self { root, bar, synthesized: true })
    }

    pub fn element(&self) -> &Element {
        &self.root
    }

    /// True if the overlay was built here rather than found in the page.
    pub fn was_synthesized(&self) -> bool {
        self.synthesized
    }

    pub fn set_progress(&self, percent: f64) {
        let Some(bar) = &self.bar else {
            return;
        };
        if let Err(e) = bar.style().set_property("width", &format!("{}%", percent)) {
            log::debug!("Progress update skipped: {}", js_error(e));
        }
    }

    pub fn mark_loaded(&self) {
        if let Err(e) = self.root.class_list().add_1(LOADED_CLASS) {
            log::debug!("Could not mark preloader loaded: {}", js_error(e));
        }
    }

    pub fn remove(&self) {
        self.root.remove();
    }
}
