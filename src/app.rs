//! To-Do App
//!
//! Root component; hosts the single list screen.

use leptos::prelude::*;
use todo_core::config::TodoConfig;

use crate::components::TodoScreen;

#[component]
pub fn App(config: TodoConfig) -> impl IntoView {
    view! {
        <div class="mobile-app-container">
            <TodoScreen config=config />
        </div>
    }
}
