//! Typed error definitions for the page loader.
//!
//! Element lookups are never errors: an absent overlay, progress bar or
//! skeleton simply skips the corresponding update. The variants here cover
//! the remaining failures, which are bad configuration and a missing or
//! rejecting DOM environment.

mod config;
mod dom;

pub use config::ConfigError;
pub use dom::DomError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type that wraps all domain-specific errors.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum PageLoadError {
    /// Wraps a configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Wraps a DOM access error
    #[error("DOM error: {0}")]
    Dom(#[from] DomError),
}

/// Standard Result type using PageLoadError.
pub type Result<T> = std::result::Result<T, PageLoadError>;
