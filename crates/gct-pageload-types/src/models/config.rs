//! Page loader configuration.
//!
//! Values are fixed when the managers are constructed. There is no way to
//! change them afterwards.

use serde::{Deserialize, Serialize};

use crate::dom::{DEFAULT_ROOT_MARGIN, SKELETON_CARD_SELECTOR};
use crate::error::ConfigError;

/// Preloader timing, all values in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreloaderConfig {
    /// Minimum time the overlay stays visible
    pub min_load_time: u32,
    /// Time after which the overlay is hidden even without a load event
    pub max_load_time: u32,
    /// Fade-out animation length before the overlay is removed
    pub fade_out_duration: u32,
}

impl PreloaderConfig {
    /// Create default configuration.
    pub fn new() -> Self {
        Self { min_load_time: 500, max_load_time: 5000, fade_out_duration: 500 }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_load_time < self.min_load_time {
            return Err(ConfigError::invalid(
                "maxLoadTime",
                format!(
                    "{}ms is shorter than minLoadTime ({}ms)",
                    self.max_load_time, self.min_load_time
                ),
            ));
        }
        Ok(())
    }
}

impl Default for PreloaderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Skeleton observer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkeletonConfig {
    /// IntersectionObserver `rootMargin`, extends the trigger region past the viewport
    pub root_margin: String,
    /// Selector for placeholder elements observed at init
    pub selector: String,
}

impl SkeletonConfig {
    /// Create default configuration.
    pub fn new() -> Self {
        Self {
            root_margin: DEFAULT_ROOT_MARGIN.to_string(),
            selector: SKELETON_CARD_SELECTOR.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root_margin.trim().is_empty() {
            return Err(ConfigError::invalid("rootMargin", "must not be empty"));
        }
        if self.selector.trim().is_empty() {
            return Err(ConfigError::invalid("selector", "must not be empty"));
        }
        Ok(())
    }
}

impl Default for SkeletonConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Full page loader configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLoadConfig {
    pub preloader: PreloaderConfig,
    pub skeleton: SkeletonConfig,
}

impl PageLoadConfig {
    /// Parse and validate a JSON document.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::from_json_error(&e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.preloader.validate()?;
        self.skeleton.validate()
    }
}
