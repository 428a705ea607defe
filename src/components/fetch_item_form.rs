//! Fetch Item Form Component
//!
//! Form for fetching one item envelope by id, with an optional query.

use leptos::prelude::*;
use leptos::task::spawn_local;

use catalog_api_client::ItemEnvelope;

use crate::context::ApiContext;
use crate::models::{parse_item_id, SubmitStatus};

/// Shown in the shared banner when a fetch fails.
const FETCH_ERROR: &str = "Failed to fetch item. Make sure the API is running.";

/// Form for fetching a single item by id
#[component]
pub fn FetchItemForm(set_error: WriteSignal<Option<String>>) -> impl IntoView {
    let ctx = use_context::<ApiContext>().expect("ApiContext should be provided");

    let (item_id, set_item_id) = signal(String::new());
    let (query, set_query) = signal(String::new());
    let (fetched, set_fetched) = signal::<Option<ItemEnvelope>>(None);
    let (status, set_status) = signal(SubmitStatus::Idle);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = parse_item_id(&item_id.get()) else {
            return;
        };
        let q = query.get();
        let client = ctx.client();

        set_status.set(SubmitStatus::Submitting);
        set_error.set(None);
        set_fetched.set(None);

        spawn_local(async move {
            let outcome = match client.get_item(id, Some(&q)).await {
                Ok(envelope) => {
                    set_fetched.try_set(Some(envelope));
                    SubmitStatus::Succeeded
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[ITEMS] fetch failed: {err}").into());
                    set_error.try_set(Some(FETCH_ERROR.to_string()));
                    SubmitStatus::Failed
                }
            };
            // Busy flag is released on every path.
            set_status.try_set(outcome);
        });
    };

    view! {
        <section class="card">
            <h2>"Fetch Item"</h2>
            <form class="item-form" on:submit=on_submit>
                <label for="item-id">"Item ID"</label>
                <input
                    type="number"
                    id="item-id"
                    placeholder="Enter item ID"
                    required
                    prop:value=move || item_id.get()
                    on:input=move |ev| set_item_id.set(event_target_value(&ev))
                />

                <label for="item-query">"Query (optional)"</label>
                <input
                    type="text"
                    id="item-query"
                    placeholder="Enter query parameter"
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />

                <button type="submit" disabled=move || status.get().is_busy()>
                    {move || if status.get().is_busy() { "Fetching..." } else { "Fetch Item" }}
                </button>
            </form>

            {move || fetched.get().map(|envelope| {
                let rendered = serde_json::to_string_pretty(&envelope)
                    .unwrap_or_else(|_| format!("{envelope:?}"));
                view! {
                    <div class="result-block">
                        <h3>"Result:"</h3>
                        <pre>{rendered}</pre>
                    </div>
                }
            })}
        </section>
    }
}
