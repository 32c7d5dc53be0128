//! # GCT Page Load Types
//!
//! Configuration models, DOM contract constants, and error definitions shared
//! by the page loader crates.
//!
//! - **`error`** - Typed error hierarchy for configuration and DOM access
//! - **`models`** - Preloader and skeleton configuration
//! - **`dom`** - Selectors, class names, and markup the page stylesheet relies on
//!
//! ## Architecture Role
//!
//! ```text
//!            gct-pageload-types (this crate)
//!                      │
//!                      ▼
//!             gct-pageload-core
//!                      │
//!                      ▼
//!             gct-pageload-web (WASM)
//! ```

pub mod dom;
pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{ConfigError, DomError, PageLoadError, Result};

// Re-export configuration models
pub use models::{PageLoadConfig, PreloaderConfig, SkeletonConfig};
