//! Reusable UI components

mod preloader_overlay;
mod skeleton_card;

pub use preloader_overlay::PreloaderOverlay;
pub use skeleton_card::{SkeletonCard, SkeletonGrid};
