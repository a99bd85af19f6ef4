//! Filter Bar Component
//!
//! Buttons switching the active list filter.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::filter::ShowFilter;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="filter-bar">
            {ShowFilter::BUTTONS.iter().map(|&filter| {
                let class = move || {
                    if ctx.show_filter.get() == filter {
                        format!("btn {}", filter.active_class())
                    } else {
                        "btn".to_string()
                    }
                };
                view! {
                    <button type="button" class=class on:click=move |_| ctx.set_filter(filter)>
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
