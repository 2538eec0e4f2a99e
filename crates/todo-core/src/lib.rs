//! To-Do Core
//!
//! Framework-free domain for the to-do screen:
//! - item: the `Item` entity and its id generator
//! - list: the `TodoList` controller that owns the collection
//! - row: presentation model for a single row plus the `ItemActions` capability
//! - confirm: pending delete confirmation, keyed by item id
//! - config: screen configuration loaded from JSON

mod confirm;
mod error;
mod item;
mod list;
mod row;
pub mod config;


pub use confirm::{DeleteConfirm, DeleteStep};
pub use error::{TodoError, TodoResult};
pub use item::{IdGenerator, Item, ItemId};
pub use list::TodoList;
pub use row::{ItemActions, RowView};
