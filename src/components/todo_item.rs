//! Todo Item Component
//!
//! Individual row in the list view.

use leptos::prelude::*;

use crate::models::Todo;
use crate::store::{store_remove_todo, store_toggle_todo, use_todo_store};

/// A single to-do row: checkbox, label, delete control
#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let store = use_todo_store();

    let id = todo.id;
    let completed = todo.completed;
    let text = todo.text.clone();

    view! {
        <li class="todo-row">
            // Checkbox
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| store_toggle_todo(&store, id)
            />

            // Text
            <span class=move || if completed { "todo-text completed" } else { "todo-text" }>
                {text}
            </span>

            // Delete button
            <button class="delete-btn" on:click=move |_| store_remove_todo(&store, id)>
                "×"
            </button>
        </li>
    }
}
