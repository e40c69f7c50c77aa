//! Type Pills Component
//!
//! Horizontal row of energy-type filter pills. Selecting a pill replaces the
//! gallery's type filter.

use dioxus::prelude::*;
use holocard_core::TypeFilter;

/// Properties for the TypePills component
#[derive(Clone, PartialEq, Props)]
pub struct TypePillsProps {
    /// Filters to offer, in display order
    #[props(default = TypeFilter::all_filters())]
    pub filters: Vec<TypeFilter>,
    /// Currently selected filter
    pub selected: TypeFilter,
    /// Handler called when a filter is selected
    pub on_select: EventHandler<TypeFilter>,
}

/// Displays a row of selectable type filters
///
/// # Example
///
/// ```rust,ignore
/// let mut filter = use_signal(TypeFilter::default);
///
/// rsx! {
///     TypePills {
///         selected: filter(),
///         on_select: move |f| filter.set(f)
///     }
/// }
/// ```
#[component]
pub fn TypePills(props: TypePillsProps) -> Element {
    rsx! {
        div {
            class: "type-pills",
            role: "radiogroup",
            "aria-label": "Filter Pokémon cards by type",
            for filter in props.filters.iter() {
                {
                    let is_selected = props.selected == *filter;
                    let choice = filter.clone();
                    let label = filter.label().to_string();
                    let class = pill_class(filter, is_selected);
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{label}",
                            class: "{class}",
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(choice.clone()),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

/// CSS classes for one pill; typed pills carry a `type-<name>` accent class
pub fn pill_class(filter: &TypeFilter, selected: bool) -> String {
    let mut class = String::from("pill");
    if let TypeFilter::Type(t) = filter {
        class.push_str(&format!(" type-{}", t.to_lowercase()));
    }
    if selected {
        class.push_str(" selected");
    }
    class
}
