//! Delete Confirmation
//!
//! Tracks which item, if any, is waiting for the user to confirm its
//! deletion. Kept by item id so it outlives re-rendered rows.

use crate::item::ItemId;

/// What a delete request should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStep {
    /// Delete right away
    Delete,
    /// Ask first; the item is now pending
    Confirm,
}

/// At most one pending delete per screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteConfirm {
    required: bool,
    pending: Option<ItemId>,
}

impl DeleteConfirm {
    pub fn new(required: bool) -> Self {
        Self {
            required,
            pending: None,
        }
    }

    pub fn is_pending(&self, id: ItemId) -> bool {
        self.pending == Some(id)
    }

    /// First press of a row's delete control. Asking on another row moves the
    /// pending confirmation there.
    pub fn request(&mut self, id: ItemId) -> DeleteStep {
        if !self.required {
            return DeleteStep::Delete;
        }
        self.pending = Some(id);
        DeleteStep::Confirm
    }

    /// Returns true when `id` was pending and should now be deleted
    pub fn confirm(&mut self, id: ItemId) -> bool {
        if self.is_pending(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self, id: ItemId) {
        if self.is_pending(id) {
            self.pending = None;
        }
    }
}
