//! Todo Screen Component
//!
//! Owns the list for as long as the screen is mounted and renders the input
//! row, the items and the summary footer.

use leptos::prelude::*;
use todo_core::config::TodoConfig;
use todo_core::RowView;

use crate::components::{NewItemForm, TodoRow};
use crate::context::TodoHandle;

#[component]
pub fn TodoScreen(config: TodoConfig) -> impl IntoView {
    let handle = TodoHandle::new(config.confirm_delete);
    provide_context(handle);

    view! {
        <div class="todo-screen">
            <h1 class="todo-title">{config.title}</h1>

            <NewItemForm placeholder=config.placeholder />

            <div class="todo-list">
                <Show when=move || handle.is_empty()>
                    <p class="todo-empty">"Nothing to do"</p>
                </Show>
                <For
                    each=move || handle.rows()
                    // Rows keep no state (a pending delete lives in the handle),
                    // so a completion change just re-creates the row
                    key=|row: &RowView| (row.id, row.completed)
                    children=move |row| {
                        view! {
                            <TodoRow row=row actions=handle confirm={handle.confirm} />
                        }
                    }
                />
            </div>

            {config.show_summary.then(|| view! {
                <p class="item-count">
                    {move || {
                        format!("{} items, {} completed", handle.len(), handle.completed_count())
                    }}
                </p>
            })}
        </div>
    }
}
