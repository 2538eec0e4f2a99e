//! UI Components
//!
//! Leptos components for the to-do screen.

mod new_item_form;
mod todo_row;
mod todo_screen;

pub use new_item_form::NewItemForm;
pub use todo_row::TodoRow;
pub use todo_screen::TodoScreen;
