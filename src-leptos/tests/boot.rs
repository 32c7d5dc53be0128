//! `boot()` owns a single page per module instance. Kept in its own test
//! binary so the booted page does not leak into the DOM tests.

#![cfg(target_arch = "wasm32")]

use gct_pageload_web::bindings::boot;
use gct_pageload_web::dom;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn second_boot_returns_the_first_page() {
    let document = dom::document().unwrap();

    let first = boot(JsValue::UNDEFINED).unwrap();
    let phase = first.preloader().phase();

    // Config of a repeated call is ignored, even when it would not parse.
    let second = boot(JsValue::from_str("not a config")).unwrap();
    let again = boot(JsValue::NULL).unwrap();

    assert_eq!(dom::query_all(&document, ".preloader").unwrap().len(), 1);
    assert_eq!(second.preloader().phase(), phase);
    assert_eq!(again.skeleton().pending(), first.skeleton().pending());

    first.preloader().hide();
    assert!(second.preloader().is_loaded());
    assert!(again.preloader().is_loaded());
}
