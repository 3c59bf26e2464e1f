//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::todos::TodoList;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The to-do records and their id source
    pub todos: TodoList,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            todos: TodoList::new(),
        }
    }
}

/// Type alias for the store
pub type TodoStore = Store<AppState>;

/// Get the app store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a record to the store; true when one was created.
/// The form only clears its input buffer on true.
pub fn store_add_todo(store: &TodoStore, text: &str) -> bool {
    store.todos().write().add(text)
}

/// Flip a record's completed flag by id
pub fn store_toggle_todo(store: &TodoStore, id: u32) {
    store.todos().write().toggle(id);
}

/// Remove a record from the store by id
pub fn store_remove_todo(store: &TodoStore, id: u32) {
    store.todos().write().remove(id);
}
