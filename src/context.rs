//! Screen Context
//!
//! Reactive handle over the screen's `TodoList`, provided via Leptos Context API.

use leptos::prelude::*;
use todo_core::{DeleteConfirm, ItemActions, ItemId, RowView, TodoList};

/// Copyable handle to the list owned by one mounted screen
#[derive(Clone, Copy)]
pub struct TodoHandle {
    list: RwSignal<TodoList>,
    /// Pending delete confirmation, kept outside the rows
    pub confirm: RwSignal<DeleteConfirm>,
}

impl TodoHandle {
    /// Create an empty list, owned by the current reactive owner
    pub fn new(confirm_delete: bool) -> Self {
        Self {
            list: RwSignal::new(TodoList::new()),
            confirm: RwSignal::new(DeleteConfirm::new(confirm_delete)),
        }
    }

    /// Snapshot of the rows in display order
    pub fn rows(&self) -> Vec<RowView> {
        self.list
            .with(|list| list.items().iter().map(RowView::from).collect())
    }

    pub fn pending_text(&self) -> String {
        self.list.with(|list| list.pending_text().to_string())
    }

    pub fn set_pending_text(&self, value: String) {
        self.list.update(|list| list.set_pending_text(value));
    }

    pub fn add_item(&self) {
        self.list.update(|list| list.add_item());
    }

    pub fn len(&self) -> usize {
        self.list.with(|list| list.len())
    }

    pub fn is_empty(&self) -> bool {
        self.list.with(|list| list.is_empty())
    }

    pub fn completed_count(&self) -> usize {
        self.list.with(|list| list.completed_count())
    }
}

impl ItemActions for TodoHandle {
    fn toggle(&self, id: ItemId) {
        self.list.update(|list| list.toggle_item(id));
    }

    fn delete(&self, id: ItemId) {
        self.list.update(|list| list.delete_item(id));
    }
}

/// Get the screen handle from context
pub fn use_todo_handle() -> TodoHandle {
    expect_context::<TodoHandle>()
}
