//! Todo Row Component
//!
//! One item of the list. Holds no state of its own; intents go back to the
//! list owner through `ItemActions`, and a pending delete confirmation is read
//! from the screen's `DeleteConfirm`.

use leptos::prelude::*;
use todo_core::{DeleteConfirm, DeleteStep, ItemActions, RowView};

#[component]
pub fn TodoRow<A>(row: RowView, actions: A, confirm: RwSignal<DeleteConfirm>) -> impl IntoView
where
    A: ItemActions + Copy + Send + Sync + 'static,
{
    let id = row.id;
    let toggle_row = row.clone();
    let delete_row = row.clone();

    let delete_controls = move || {
        let delete_row = delete_row.clone();
        if confirm.with(|c| c.is_pending(id)) {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">"Delete?"</span>
                    <button
                        class="confirm-btn"
                        on:click=move |_| {
                            if confirm.try_update(|c| c.confirm(id)).unwrap_or(false) {
                                delete_row.on_delete(&actions);
                            }
                        }
                    >
                        "✓"
                    </button>
                    <button class="cancel-btn" on:click=move |_| confirm.update(|c| c.cancel(id))>
                        "✗"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class="delete-btn"
                    aria-label="Delete"
                    on:click=move |_| {
                        if confirm.try_update(|c| c.request(id)) == Some(DeleteStep::Delete) {
                            delete_row.on_delete(&actions);
                        }
                    }
                >
                    "🗑"
                </button>
            }
            .into_any()
        }
    };

    view! {
        <div class="todo-item">
            <button
                class=row.check_class()
                aria-label="Toggle"
                on:click=move |_| toggle_row.on_toggle(&actions)
            >
                {row.check_icon()}
            </button>

            <span class=row.text_class()>{row.text.clone()}</span>

            {delete_controls}
        </div>
    }
}
