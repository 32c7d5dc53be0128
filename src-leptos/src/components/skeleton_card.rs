//! Skeleton placeholder cards

use leptos::prelude::*;

/// One placeholder card, same structure as `card_skeleton_markup()`.
#[component]
pub fn SkeletonCard() -> impl IntoView {
    view! {
        <div class="skeleton-card">
            <div class="skeleton skeleton-image"></div>
            <div class="skeleton skeleton-title"></div>
            <div class="skeleton skeleton-text"></div>
            <div class="skeleton skeleton-text short"></div>
            <div class="skeleton skeleton-button" style="margin-top: 1rem;"></div>
        </div>
    }
}

/// A grid of placeholder cards.
#[component]
pub fn SkeletonGrid(
    /// Number of cards
    #[prop(default = 6)]
    count: usize,
    /// Additional CSS class
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    view! {
        <div class=format!("skeleton-grid {}", class)>
            {(0..count).map(|_| view! { <SkeletonCard /> }).collect_view()}
        </div>
    }
}
