//! Home Page Component
//!
//! Landing view: joined root + health fetch with a status card and links.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::Page;
use crate::context::ApiContext;

/// Shown when either landing request fails; partial data is never rendered.
const CONNECT_ERROR: &str =
    "Failed to connect to API. Make sure the backend is running on http://localhost:8000";

/// Landing page with API status, quick links and run instructions
#[component]
pub fn HomePage(set_page: WriteSignal<Page>) -> impl IntoView {
    let ctx = use_context::<ApiContext>().expect("ApiContext should be provided");

    let (message, set_message) = signal(String::new());
    let (health_status, set_health_status) = signal(String::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let docs_url = format!("{}/docs", ctx.base_url());

    // One-shot load on mount; both requests must succeed to render data.
    Effect::new(move |_| {
        let client = ctx.client();
        spawn_local(async move {
            set_loading.try_set(true);
            match futures::try_join!(client.root(), client.health()) {
                Ok((root, health)) => {
                    set_message.try_set(root.message);
                    set_health_status.try_set(health.status);
                    set_error.try_set(None);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[HOME] load failed: {err}").into());
                    set_error.try_set(Some(CONNECT_ERROR.to_string()));
                }
            }
            // The view may already be gone when the join settles; try_set
            // is a no-op once the scope is disposed.
            set_loading.try_set(false);
        });
    });

    view! {
        <div class="home-page">
            <header class="page-header">
                <h1>"Item Catalog"</h1>
                <p class="subtitle">"A demo frontend for the catalog API"</p>
            </header>

            <section class="card">
                <h2>"API Status"</h2>
                {move || if loading.get() {
                    view! { <p class="loading-indicator">"Loading..."</p> }.into_any()
                } else if let Some(text) = error.get() {
                    view! { <div class="error-banner"><p>{text}</p></div> }.into_any()
                } else {
                    view! {
                        <dl class="status-list">
                            <dt>"Message"</dt>
                            <dd>{move || message.get()}</dd>
                            <dt>"Health Status"</dt>
                            <dd><span class="health-badge">{move || health_status.get()}</span></dd>
                        </dl>
                    }.into_any()
                }}
            </section>

            <section class="card">
                <h2>"Quick Links"</h2>
                <button class="link-primary" on:click=move |_| set_page.set(Page::Items)>
                    "Manage Items"
                </button>
                <a class="link-secondary" href=docs_url target="_blank" rel="noopener noreferrer">
                    "API Documentation"
                </a>
            </section>

            <section class="card">
                <h2>"Getting Started"</h2>
                <div class="instruction">
                    <h3>"Backend"</h3>
                    <code>"uvicorn main:app --reload"</code>
                </div>
                <div class="instruction">
                    <h3>"Frontend"</h3>
                    <code>"trunk serve"</code>
                </div>
            </section>
        </div>
    }
}
