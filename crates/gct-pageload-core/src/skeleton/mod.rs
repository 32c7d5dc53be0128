//! Skeleton placeholder tracking
//!
//! Placeholders are registered once at init. The first intersection report
//! that finds one visible hands it to the [`ContentLoader`] and drops it from
//! the set, so each element triggers at most once.

mod markup;

#[cfg(test)]
mod tests;

pub use markup::{card_skeleton_markup, SkeletonPart};

use tracing::debug;

/// Hook that swaps a visible placeholder for real content.
///
/// Replacement itself belongs to component-specific code; the default
/// implementation does nothing.
pub trait ContentLoader<T> {
    fn load_content(&self, skeleton: &T);
}

/// Loader that leaves placeholders untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopContentLoader;

impl<T> ContentLoader<T> for NoopContentLoader {
    fn load_content(&self, _skeleton: &T) {}
}

impl<T, F> ContentLoader<T> for F
where
    F: Fn(&T),
{
    fn load_content(&self, skeleton: &T) {
        self(skeleton);
    }
}

/// Set of placeholders still waiting to become visible.
///
/// Membership only shrinks after registration. Elements are compared with
/// `PartialEq`, which for DOM handles is JS identity.
#[derive(Debug)]
pub struct SkeletonTracker<T> {
    pending: Vec<T>,
}

impl<T> Default for SkeletonTracker<T> {
    fn default() -> Self {
        Self { pending: Vec::new() }
    }
}

impl<T: PartialEq> SkeletonTracker<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a placeholder. Returns false if it is already tracked.
    pub fn observe(&mut self, skeleton: T) -> bool {
        if self.pending.contains(&skeleton) {
            return false;
        }
        self.pending.push(skeleton);
        true
    }

    pub fn is_pending(&self, skeleton: &T) -> bool {
        self.pending.contains(skeleton)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Process one batch of `(element, is_intersecting)` reports.
    ///
    /// Every pending element reported visible is passed to `loader` and
    /// removed. The removed elements are returned so the caller can stop
    /// observing them.
    pub fn reveal<I, L>(&mut self, entries: I, loader: &L) -> Vec<T>
    where
        I: IntoIterator<Item = (T, bool)>,
        L: ContentLoader<T> + ?Sized,
    {
        let mut revealed = Vec::new();
        for (skeleton, visible) in entries {
            if !visible {
                continue;
            }
            let Some(index) = self.pending.iter().position(|p| *p == skeleton) else {
                continue;
            };
            let skeleton = self.pending.swap_remove(index);
            loader.load_content(&skeleton);
            revealed.push(skeleton);
        }
        if !revealed.is_empty() {
            debug!(revealed = revealed.len(), pending = self.pending.len(), "Skeletons visible");
        }
        revealed
    }

    /// Forget every placeholder, returning them for the caller to unobserve.
    pub fn clear(&mut self) -> Vec<T> {
        std::mem::take(&mut self.pending)
    }
}
