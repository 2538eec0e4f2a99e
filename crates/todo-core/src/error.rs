//! Error Types
//!
//! Rejections produced by the fallible controller operations. None of these
//! reach the user; the total operations log and discard them.

use crate::item::ItemId;

/// Common result type for controller operations
pub type TodoResult<T> = Result<T, TodoError>;

/// Why a controller operation left the list untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// Pending text was empty after trimming
    EmptyText,
    /// No item with this id
    NotFound(ItemId),
}

impl std::fmt::Display for TodoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TodoError::EmptyText => write!(f, "Empty text: nothing to add"),
            TodoError::NotFound(id) => write!(f, "Not found: item {}", id),
        }
    }
}

impl std::error::Error for TodoError {}
