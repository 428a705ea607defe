//! Catalog Frontend App
//!
//! Top-level component with tab-style page switching.

use leptos::prelude::*;

use crate::components::{HomePage, ItemsPage};
use crate::context::ApiContext;

/// Pages reachable from the top navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Items,
}

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Home);

    // Provide the shared client to all children
    provide_context(ApiContext::new());

    let tab_class = move |target: Page| {
        move || {
            if page.get() == target {
                "page-tab active"
            } else {
                "page-tab"
            }
        }
    };

    view! {
        <div class="app-layout">
            <nav class="page-nav">
                <button class=tab_class(Page::Home) on:click=move |_| set_page.set(Page::Home)>
                    "Home"
                </button>
                <button class=tab_class(Page::Items) on:click=move |_| set_page.set(Page::Items)>
                    "Items"
                </button>
            </nav>

            <main class="main-content">
                {move || match page.get() {
                    Page::Home => view! { <HomePage set_page=set_page /> }.into_any(),
                    Page::Items => view! { <ItemsPage set_page=set_page /> }.into_any(),
                }}
            </main>
        </div>
    }
}
