//! To-Do List Controller
//!
//! Owns the item collection and the pending input text for one screen.
//! Items are kept newest-first.

use log::debug;

use crate::error::{TodoError, TodoResult};
use crate::item::{IdGenerator, Item, ItemId};

/// Controller state for a single to-do screen
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    items: Vec<Item>,
    pending_text: String,
    ids: IdGenerator,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in display order (newest first)
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn pending_text(&self) -> &str {
        &self.pending_text
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    /// Store the raw input text. Trimming happens only when adding.
    pub fn set_pending_text(&mut self, value: impl Into<String>) {
        self.pending_text = value.into();
    }

    /// Add the pending text as a new item; blank input is ignored.
    pub fn add_item(&mut self) {
        if let Err(e) = self.try_add_item() {
            debug!("[TODO] add ignored: {}", e);
        }
    }

    /// Prepend a new item built from the trimmed pending text and clear the
    /// input. Leaves everything untouched when the text is blank.
    pub fn try_add_item(&mut self) -> TodoResult<ItemId> {
        let text = self.pending_text.trim();
        if text.is_empty() {
            return Err(TodoError::EmptyText);
        }

        let item = Item::new(self.ids.next_id(), text);
        let id = item.id;
        debug!("[TODO] added item {}: {:?}", id, item.text);
        self.items.insert(0, item);
        self.pending_text.clear();
        Ok(id)
    }

    /// Flip completion of the item with `id`; unknown ids are ignored.
    pub fn toggle_item(&mut self, id: ItemId) {
        if let Err(e) = self.try_toggle_item(id) {
            debug!("[TODO] toggle ignored: {}", e);
        }
    }

    /// Replace the matching item with its toggled copy, returning the new
    /// completion state.
    pub fn try_toggle_item(&mut self, id: ItemId) -> TodoResult<bool> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(TodoError::NotFound(id))?;
        *item = item.toggled();
        debug!("[TODO] item {} completed={}", id, item.completed);
        Ok(item.completed)
    }

    /// Remove the item with `id`; unknown ids are ignored.
    pub fn delete_item(&mut self, id: ItemId) {
        if let Err(e) = self.try_delete_item(id) {
            debug!("[TODO] delete ignored: {}", e);
        }
    }

    /// Remove and return the matching item. Remaining order is preserved.
    pub fn try_delete_item(&mut self, id: ItemId) -> TodoResult<Item> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(TodoError::NotFound(id))?;
        let removed = self.items.remove(index);
        debug!("[TODO] deleted item {}", id);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with(texts: &[&str]) -> TodoList {
        let mut list = TodoList::new();
        for text in texts {
            list.set_pending_text(*text);
            list.add_item();
        }
        list
    }

    #[test]
    fn test_new_list_is_empty() {
        let list = TodoList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.pending_text(), "");
    }

    #[test]
    fn test_add_trims_and_clears_input() {
        let mut list = TodoList::new();
        list.set_pending_text("  Buy milk \n");
        let id = list.try_add_item().unwrap();

        assert_eq!(list.pending_text(), "");
        let item = list.get(id).unwrap();
        assert_eq!(item.text, "Buy milk");
        assert!(!item.completed);
    }

    #[test]
    fn test_blank_add_is_rejected_and_keeps_input() {
        let mut list = list_with(&["a"]);
        list.set_pending_text("   ");

        assert_eq!(list.try_add_item(), Err(TodoError::EmptyText));
        list.add_item();

        assert_eq!(list.len(), 1);
        assert_eq!(list.pending_text(), "   ");
    }

    #[test]
    fn test_set_pending_text_does_not_trim() {
        let mut list = TodoList::new();
        list.set_pending_text(" draft ");
        assert_eq!(list.pending_text(), " draft ");
    }

    #[test]
    fn test_toggle_unknown_id() {
        let mut list = list_with(&["a", "b"]);
        let before = list.items().to_vec();
        let missing = ItemId::from_raw(999);

        assert_eq!(list.try_toggle_item(missing), Err(TodoError::NotFound(missing)));
        list.toggle_item(missing);
        assert_eq!(list.items(), before.as_slice());
    }

    #[test]
    fn test_toggle_returns_new_state() {
        let mut list = list_with(&["a"]);
        let id = list.items()[0].id;
        assert_eq!(list.try_toggle_item(id), Ok(true));
        assert_eq!(list.try_toggle_item(id), Ok(false));
    }

    #[test]
    fn test_delete_returns_removed_item() {
        let mut list = list_with(&["a", "b", "c"]);
        let id = list.items()[1].id;

        let removed = list.try_delete_item(id).unwrap();
        assert_eq!(removed.text, "b");
        let texts: Vec<_> = list.items().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["c", "a"]);

        assert_eq!(list.try_delete_item(id), Err(TodoError::NotFound(id)));
    }

    #[test]
    fn test_completed_count() {
        let mut list = list_with(&["a", "b", "c"]);
        let ids: Vec<_> = list.items().iter().map(|i| i.id).collect();
        list.toggle_item(ids[0]);
        list.toggle_item(ids[2]);
        assert_eq!(list.completed_count(), 2);
        assert_eq!(list.len(), 3);
    }
}
