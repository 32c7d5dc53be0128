//! Inline preloader overlay
//!
//! Rendering this up front lets the preloader find an existing overlay
//! instead of synthesizing one.

use gct_pageload_types::dom::LOADING_TEXT;
use leptos::prelude::*;

#[component]
pub fn PreloaderOverlay(
    /// Label under the spinner
    #[prop(optional, into)]
    text: Option<String>,
) -> impl IntoView {
    let text = text.unwrap_or_else(|| LOADING_TEXT.to_string());

    view! {
        <div class="preloader">
            <div class="preloader-spinner"></div>
            <p class="preloader-text">{text}</p>
            <div class="preloader-progress">
                <div class="preloader-progress-bar"></div>
            </div>
        </div>
    }
}
