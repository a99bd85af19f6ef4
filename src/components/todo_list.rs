//! Todo List Component
//!
//! Renders the fetched snapshot through the active filter.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::AppContext;
use crate::filter::apply_filter;
use crate::store::{use_todo_store, TodoStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_todo_store();

    let visible = move || apply_filter(&store.todos().get(), ctx.show_filter.get());

    view! {
        <div class="todo-list">
            <Show when=move || !store.loaded().get()>
                <h1 class="title">
                    <span class="accent">"CARREGANDO"</span>
                </h1>
            </Show>
            <For
                each=visible
                // Flags are part of the key so a toggled row re-renders
                key=|todo| (todo.id.clone(), todo.completed, todo.favorite)
                children=move |todo| view! { <TodoRow todo=todo /> }
            />
        </div>
    }
}
