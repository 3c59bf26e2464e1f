//! Todo List View Component
//!
//! Reactive projection of the record list, one row per record in
//! insertion order. An empty list renders an empty view.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::store::{use_todo_store, AppStateStoreFields};

/// The record list as rows
#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <ul class="todo-list">
            <For
                each=move || store.todos().read().items.clone()
                key=|todo| {
                    // Key on every rendered field so changes cause a re-render
                    (todo.id, todo.text.clone(), todo.completed)
                }
                children=move |todo| view! { <TodoItem todo=todo /> }
            />
        </ul>
    }
}
