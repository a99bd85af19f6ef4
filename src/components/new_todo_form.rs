//! New Todo Form Component
//!
//! Text box plus submit button for adding todos.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;

/// Only the empty string is refused here; whitespace goes through as typed
pub fn is_submittable(text: &str) -> bool {
    !text.is_empty()
}

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_text, set_new_text) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let description = new_text.get();
        if !is_submittable(&description) { return; }

        // Cleared as soon as the call is fired, not when it succeeds
        set_new_text.set(String::new());

        spawn_local(async move {
            let result = commands::add(&description).await;
            ctx.finish_mutation("add", result);
        });
    };

    view! {
        <form on:submit=add_todo>
            <div class="form-row">
                <input
                    name="todo"
                    type="text"
                    class="todo-input"
                    placeholder="Eu preciso..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit" class="btn">"Adicionar"</button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_not_submitted() {
        assert!(!is_submittable(""));
    }

    #[test]
    fn test_whitespace_is_submitted() {
        assert!(is_submittable(" "));
        assert!(is_submittable("buy milk"));
    }
}
