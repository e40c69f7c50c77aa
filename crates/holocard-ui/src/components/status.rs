//! Loading and empty-state indicators

use dioxus::prelude::*;

/// What a data-backed view is currently showing
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    /// Loaded, but nothing to show
    Empty,
}

impl LoadState {
    /// Settle a finished load by result count
    pub fn from_count(count: usize) -> Self {
        if count == 0 {
            LoadState::Empty
        } else {
            LoadState::Ready
        }
    }

    /// State for a resource that may be refetching.
    ///
    /// `count` is the result count of the last finished load, if any. A
    /// pending refetch shows as loading even when an older result is held.
    pub fn resolve(pending: bool, count: Option<usize>) -> Self {
        match count {
            Some(count) if !pending => LoadState::from_count(count),
            _ => LoadState::Loading,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Spinner with a caption
#[component]
pub fn LoadingIndicator(label: String) -> Element {
    rsx! {
        div { class: "loading-state",
            div {
                class: "loading-spinner",
                role: "img",
                "aria-label": "Loading",
            }
            p { class: "loading-label", "{label}" }
        }
    }
}

/// Message shown when a query matched nothing
#[component]
pub fn EmptyState(
    #[props(default = "No cards found. Try a different search term.".to_string())] message: String,
) -> Element {
    rsx! {
        div { class: "empty-state",
            p { "{message}" }
        }
    }
}
