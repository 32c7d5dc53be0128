//! Demo page: inline overlay plus a grid of placeholder cards

use crate::components::{PreloaderOverlay, SkeletonGrid};
use leptos::prelude::*;

/// Root App component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <PreloaderOverlay />
        <main class="main-content">
            <section class="page">
                <header class="page-header">
                    <h1>"Campus News"</h1>
                    <p class="subtitle">"Latest announcements and events"</p>
                </header>
                <SkeletonGrid count=6 />
            </section>
        </main>
    }
}
