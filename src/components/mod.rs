//! UI Components
//!
//! Reusable Leptos components.

mod todo_form;
mod todo_item;
mod todo_list_view;

pub use todo_form::TodoForm;
pub use todo_item::TodoItem;
pub use todo_list_view::TodoListView;
