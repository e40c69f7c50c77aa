//! Pager Component
//!
//! Previous/next navigation for paged listings.

use dioxus::prelude::*;

use super::button::{Button, ButtonVariant};

/// Previous / "page x of y" / next
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Pager {
///         page: listing.page,
///         page_count: listing.page_count(),
///         has_previous: listing.has_previous(),
///         has_next: listing.has_next(),
///         on_change: move |p| query.write().page = p,
///     }
/// }
/// ```
#[component]
pub fn Pager(
    /// Current 1-based page
    page: u32,
    /// Total number of pages
    page_count: u32,
    /// Whether an earlier page exists
    has_previous: bool,
    /// Whether a later page exists
    has_next: bool,
    /// Called with the requested page
    on_change: EventHandler<u32>,
) -> Element {
    let page_count = page_count.max(1);
    let page = page.clamp(1, page_count);

    if page_count == 1 {
        return VNode::empty();
    }
    let label = page_label(page, page_count);

    rsx! {
        nav { class: "pager", "aria-label": "Pagination",
            Button {
                variant: ButtonVariant::Ghost,
                class: "pager__step".to_string(),
                disabled: !has_previous,
                onclick: move |_| on_change.call(page.saturating_sub(1).max(1)),
                "‹ Prev"
            }
            span { class: "pager__label", "{label}" }
            Button {
                variant: ButtonVariant::Ghost,
                class: "pager__step".to_string(),
                disabled: !has_next,
                onclick: move |_| on_change.call(page + 1),
                "Next ›"
            }
        }
    }
}

/// "Page x of y"
pub fn page_label(page: u32, page_count: u32) -> String {
    format!("Page {} of {}", page, page_count.max(1))
}
