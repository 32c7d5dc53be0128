//! Configuration models for the preloader and skeleton loader.

mod config;

pub use config::{PageLoadConfig, PreloaderConfig, SkeletonConfig};
