//! DOM contract shared with the site stylesheet.
//!
//! The CSS owns every visual detail (spinner, fade, shimmer); the loader only
//! looks elements up by these selectors and toggles these classes.

/// Full-screen overlay container.
pub const PRELOADER_SELECTOR: &str = ".preloader";
pub const PRELOADER_CLASS: &str = "preloader";

/// Fill element inside the progress track.
pub const PROGRESS_BAR_SELECTOR: &str = ".preloader-progress-bar";

/// Added to the overlay to start the CSS fade-out.
pub const LOADED_CLASS: &str = "loaded";

/// Placeholder cards observed by the skeleton loader.
pub const SKELETON_CARD_SELECTOR: &str = ".skeleton-card";
pub const SKELETON_CARD_CLASS: &str = "skeleton-card";

pub const DEFAULT_ROOT_MARGIN: &str = "100px";

/// Overlay label text.
pub const LOADING_TEXT: &str = "Loading";

/// Children of a synthesized overlay.
pub const OVERLAY_INNER_HTML: &str = r#"
    <div class="preloader-spinner"></div>
    <p class="preloader-text">Loading</p>
    <div class="preloader-progress">
        <div class="preloader-progress-bar"></div>
    </div>
"#;
