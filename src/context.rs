//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::logging;
use leptos::prelude::*;

use crate::filter::ShowFilter;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped to mark the fetched list stale - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped to mark the fetched list stale - write
    set_reload_trigger: WriteSignal<u32>,
    /// Active list filter - read
    pub show_filter: ReadSignal<ShowFilter>,
    /// Active list filter - write
    set_show_filter: WriteSignal<ShowFilter>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        show_filter: (ReadSignal<ShowFilter>, WriteSignal<ShowFilter>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            show_filter: show_filter.0,
            set_show_filter: show_filter.1,
        }
    }

    /// Mark the todo list stale so it is fetched again
    pub fn invalidate(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// True while no invalidation happened since `trigger` was read
    pub fn is_current(&self, trigger: u32) -> bool {
        self.reload_trigger.get_untracked() == trigger
    }

    pub fn set_filter(&self, filter: ShowFilter) {
        self.set_show_filter.set(filter);
    }

    /// Refetch after a successful mutation; failures are only logged
    pub fn finish_mutation<T>(&self, op: &str, result: Result<T, String>) {
        match result {
            Ok(_) => self.invalidate(),
            Err(e) => logging::error!("[APP] {} failed: {}", op, e),
        }
    }
}
