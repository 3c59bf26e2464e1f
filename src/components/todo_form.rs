//! Todo Form Component
//!
//! Input buffer plus the add control.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{store_add_todo, use_todo_store};

/// Form for committing new to-do records.
///
/// Submits on the Add button or Enter in the input (native form submit).
/// The pending text lives here, not in the store; it is only cleared when
/// a record was actually created, so a rejected blank submit leaves the
/// buffer as typed.
#[component]
pub fn TodoForm() -> impl IntoView {
    let store = use_todo_store();

    let (input_text, set_input_text) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = input_text.get();
        if store_add_todo(&store, &text) {
            set_input_text.set(String::new());
        }
    };

    view! {
        <form class="todo-form" on:submit=add_todo>
            <input
                type="text"
                class="todo-input"
                placeholder="Add a new todo..."
                prop:value=move || input_text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_input_text.set(input.value());
                }
            />
            <button type="submit" class="add-btn">"Add"</button>
        </form>
    }
}
