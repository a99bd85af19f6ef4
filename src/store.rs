//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::Todo;

/// Last fetched snapshot of the todo list
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Every todo, as returned by the backend
    pub todos: Vec<Todo>,
    /// False until the first fetch resolves
    pub loaded: bool,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

/// Replace the snapshot wholesale; it is never patched in place
pub fn store_replace_todos(store: &TodoStore, todos: Vec<Todo>) {
    *store.todos().write() = todos;
    if !store.loaded().get_untracked() {
        *store.loaded().write() = true;
    }
}
