//! Items Page Component
//!
//! Fetch-by-id and create-item flows with a shared error banner.

use leptos::prelude::*;

use crate::app::Page;
use crate::components::{CreateItemForm, FetchItemForm};

/// Items page: two independent form flows side by side
#[component]
pub fn ItemsPage(set_page: WriteSignal<Page>) -> impl IntoView {
    // Whichever flow failed last owns the banner.
    let (error, set_error) = signal::<Option<String>>(None);

    view! {
        <div class="items-page">
            <button class="back-link" on:click=move |_| set_page.set(Page::Home)>
                "← Back to Home"
            </button>

            <header class="page-header">
                <h1>"Items Management"</h1>
                <p class="subtitle">"Create and fetch items from the API"</p>
            </header>

            <div class="form-grid">
                <FetchItemForm set_error=set_error />
                <CreateItemForm set_error=set_error />
            </div>

            {move || error.get().map(|text| view! {
                <div class="error-banner"><p>{text}</p></div>
            })}
        </div>
    }
}
