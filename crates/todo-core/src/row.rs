//! Row Presentation
//!
//! What a single row shows, and the capability it uses to send intents back
//! to whoever owns the list.

use crate::item::{Item, ItemId};

/// Intents a row can raise about its item.
///
/// Implemented by the list owner and handed to each row, so rows never hold
/// the collection themselves.
pub trait ItemActions {
    fn toggle(&self, id: ItemId);
    fn delete(&self, id: ItemId);
}

/// Read-only snapshot of one item as a row renders it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
}

impl RowView {
    pub fn new(id: ItemId, text: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            text: text.into(),
            completed,
        }
    }

    /// Glyph for the completion toggle
    pub fn check_icon(&self) -> &'static str {
        if self.completed {
            "✔"
        } else {
            "○"
        }
    }

    pub fn check_class(&self) -> &'static str {
        if self.completed {
            "todo-check checked"
        } else {
            "todo-check"
        }
    }

    /// Class for the text span; completed items are struck through
    pub fn text_class(&self) -> &'static str {
        if self.completed {
            "todo-text completed"
        } else {
            "todo-text"
        }
    }

    pub fn on_toggle<A: ItemActions + ?Sized>(&self, actions: &A) {
        actions.toggle(self.id);
    }

    pub fn on_delete<A: ItemActions + ?Sized>(&self, actions: &A) {
        actions.delete(self.id);
    }
}

impl From<&Item> for RowView {
    fn from(item: &Item) -> Self {
        Self::new(item.id, item.text.clone(), item.completed)
    }
}
