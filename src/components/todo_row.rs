//! Todo Row Component
//!
//! One todo with its complete / favorite / delete icons.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::Todo;
use crate::commands;
use crate::context::AppContext;

/// A single todo row
///
/// The icons send the flag values this row was rendered with.
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let Todo { id, description, completed, favorite } = todo;

    let complete_id = id.clone();
    let on_complete = move |_: web_sys::MouseEvent| {
        let id = complete_id.clone();
        spawn_local(async move {
            let result = commands::complete(&id, completed).await;
            ctx.finish_mutation("complete", result);
        });
    };

    let favorite_id = id.clone();
    let on_favorite = move |_: web_sys::MouseEvent| {
        let id = favorite_id.clone();
        spawn_local(async move {
            let result = commands::favorite(&id, favorite).await;
            ctx.finish_mutation("favorite", result);
        });
    };

    let on_delete = move |_: web_sys::MouseEvent| {
        let id = id.clone();
        spawn_local(async move {
            let result = commands::delete(&id).await;
            ctx.finish_mutation("delete", result);
        });
    };

    view! {
        <div class="todo-row">
            {description}
            <div class="todo-actions">
                <button
                    class=if completed { "icon check on" } else { "icon check" }
                    title="Completar"
                    on:click=on_complete
                >
                    "✔"
                </button>
                <button
                    class=if favorite { "icon star on" } else { "icon star" }
                    title="Favoritar"
                    on:click=on_favorite
                >
                    "★"
                </button>
                <button class="icon trash" title="Apagar" on:click=on_delete>
                    "🗑"
                </button>
            </div>
        </div>
    }
}
