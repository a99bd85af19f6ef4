//! Todo Frontend App
//!
//! Main application component: header, input form, filter bar and list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::context::AppContext;
use crate::filter::ShowFilter;
use crate::store::{store_replace_todos, TodoState};
use crate::components::{NewTodoForm, FilterBar, TodoList};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (show_filter, set_show_filter) = signal(ShowFilter::All);
    let store = Store::new(TodoState::default());

    // Provide context to all children
    provide_context(store);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), (show_filter, set_show_filter));
    provide_context(ctx);

    // Fetch on mount and whenever the list is invalidated
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        spawn_local(async move {
            match commands::get_all_todos().await {
                // A newer invalidation supersedes this response
                Ok(_) if !ctx.is_current(trigger) => {}
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} todos, trigger={}", loaded.len(), trigger).into());
                    store_replace_todos(&store, loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] get_all_todos failed: {}", e).into());
                }
            }
        });
    });

    view! {
        <main class="app">
            <div class="container">
                <h1 class="title">
                    "CRIANDO " <span class="accent">"COISINHOS"</span>
                </h1>

                <section>
                    <NewTodoForm />
                    <FilterBar />
                </section>

                <TodoList />
            </div>
        </main>
    }
}
