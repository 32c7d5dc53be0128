//! DOM environment errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when the browser environment is missing or rejects a call.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum DomError {
    /// No global `window` (not running in a browser main thread)
    #[error("No window available")]
    MissingWindow,

    /// `window.document` is absent
    #[error("No document available")]
    MissingDocument,

    /// The document has no `<body>` to attach the overlay to
    #[error("Document has no body element")]
    MissingBody,

    /// A DOM API call threw
    #[error("DOM call failed: {message}")]
    Js {
        /// Stringified JS exception
        message: String,
    },
}
