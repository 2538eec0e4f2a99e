//! New Item Form Component
//!
//! Input row for adding items to the list.

use leptos::prelude::*;

use crate::context::use_todo_handle;

/// Text input plus add button; Enter or the button both submit
#[component]
pub fn NewItemForm(#[prop(into)] placeholder: String) -> impl IntoView {
    let handle = use_todo_handle();

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        handle.add_item();
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <input
                type="text"
                class="new-item-input"
                placeholder=placeholder
                prop:value=move || handle.pending_text()
                on:input=move |ev| handle.set_pending_text(event_target_value(&ev))
            />
            <button type="submit" class="add-btn" aria-label="Add">"+"</button>
        </form>
    }
}
