//! # GCT Page Load Core
//!
//! Browser-independent logic behind the page preloader and the skeleton
//! loader. Nothing in this crate touches the DOM or a real clock:
//!
//! - [`preloader::Preloader`] consumes [`preloader::Event`]s stamped with a
//!   millisecond timestamp and answers with [`preloader::Command`]s for the
//!   driver to apply (write the bar width, arm or cancel a named timer, fade
//!   and remove the overlay).
//! - [`skeleton::SkeletonTracker`] keeps the set of still-observed
//!   placeholders and decides which intersection reports fire the content hook.
//!
//! The WASM crate owns the browser handles and feeds events in.

pub mod preloader;
pub mod skeleton;

pub use preloader::{Command, Event, Phase, Preloader, Timer};
pub use skeleton::{card_skeleton_markup, ContentLoader, NoopContentLoader, SkeletonTracker};
