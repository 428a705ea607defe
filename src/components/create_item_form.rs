//! Create Item Form Component
//!
//! Form for creating a new item from a controlled draft.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::ApiContext;
use crate::models::{ItemDraft, SubmitStatus};

/// Shown in the shared banner when a create fails.
const CREATE_ERROR: &str = "Failed to create item. Make sure the API is running.";

/// Form for creating new items
#[component]
pub fn CreateItemForm(set_error: WriteSignal<Option<String>>) -> impl IntoView {
    let ctx = use_context::<ApiContext>().expect("ApiContext should be provided");

    let (draft, set_draft) = signal(ItemDraft::default());
    let (status, set_status) = signal(SubmitStatus::Idle);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get();
        if !current.is_valid() {
            return;
        }
        let client = ctx.client();

        set_status.set(SubmitStatus::Submitting);
        set_error.set(None);

        spawn_local(async move {
            let outcome = match client.create_item(&current.to_item()).await {
                Ok(created) => {
                    // The server-assigned identity is logged, not displayed.
                    web_sys::console::log_1(&format!("[ITEMS] created: {created:?}").into());
                    set_draft.try_set(ItemDraft::default());
                    SubmitStatus::Succeeded
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[ITEMS] create failed: {err}").into());
                    set_error.try_set(Some(CREATE_ERROR.to_string()));
                    SubmitStatus::Failed
                }
            };
            // Busy flag is released on every path.
            set_status.try_set(outcome);
        });
    };

    view! {
        <section class="card">
            <h2>"Create Item"</h2>
            <form class="item-form" on:submit=on_submit>
                <label for="new-name">"Name"</label>
                <input
                    type="text"
                    id="new-name"
                    placeholder="Item name"
                    required
                    prop:value=move || draft.get().name
                    on:input=move |ev| set_draft.update(|d| d.name = event_target_value(&ev))
                />

                <label for="new-description">"Description"</label>
                <textarea
                    id="new-description"
                    placeholder="Item description"
                    rows=3
                    prop:value=move || draft.get().description
                    on:input=move |ev| set_draft.update(|d| d.description = event_target_value(&ev))
                ></textarea>

                <label for="new-price">"Price"</label>
                <input
                    type="number"
                    id="new-price"
                    step="0.01"
                    placeholder="0.00"
                    required
                    prop:value=move || draft.get().price.to_string()
                    on:input=move |ev| set_draft.update(|d| {
                        d.price = event_target_value(&ev).parse().unwrap_or(0.0);
                    })
                />

                <label for="new-tax">"Tax (optional)"</label>
                <input
                    type="number"
                    id="new-tax"
                    step="0.01"
                    placeholder="0.00"
                    prop:value=move || draft.get().tax.to_string()
                    on:input=move |ev| set_draft.update(|d| {
                        d.tax = event_target_value(&ev).parse().unwrap_or(0.0);
                    })
                />

                <button type="submit" disabled=move || status.get().is_busy()>
                    {move || if status.get().is_busy() { "Creating..." } else { "Create Item" }}
                </button>
            </form>

            <Show when=move || status.get() == SubmitStatus::Succeeded>
                <div class="success-banner">
                    <p>"Item created successfully!"</p>
                </div>
            </Show>
        </section>
    }
}
