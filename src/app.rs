//! Todo App
//!
//! Main application component: owns the store and renders the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{TodoForm, TodoListView};
use crate::store::{AppState, AppStateStoreFields, TodoStore};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store: TodoStore = Store::new(AppState::new());

    // Provide the store to all children
    provide_context(store);

    // Trace list size on every mutation
    Effect::new(move |_| {
        let count = store.todos().read().items.len();
        web_sys::console::log_1(&format!("[APP] {} todos", count).into());
    });

    view! {
        <div class="container">
            <div class="card">
                <h1 class="title">"Todo List"</h1>

                <TodoForm />

                <TodoListView />

                <p class="item-count">
                    {move || format!("{} items", store.todos().read().items.len())}
                </p>
            </div>
        </div>
    }
}
