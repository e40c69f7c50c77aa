//! Search Input Component
//!
//! Name search form for the gallery. Typing updates the draft; the query
//! only changes on submit so every keystroke does not hit the API.

use dioxus::prelude::*;

use super::button::{Button, ButtonVariant};

/// Properties for the SearchBar component
#[derive(Clone, PartialEq, Props)]
pub struct SearchBarProps {
    /// Current draft value
    pub value: String,
    /// Handler called when the draft changes
    pub oninput: EventHandler<String>,
    /// Handler called with the trimmed draft on submit
    pub onsubmit: EventHandler<String>,
    /// Placeholder text
    #[props(default = "Search for Pokémon...".to_string())]
    pub placeholder: String,
}

/// Search field with submit button
///
/// # Example
///
/// ```rust,ignore
/// let mut draft = use_signal(String::new);
///
/// rsx! {
///     SearchBar {
///         value: draft(),
///         oninput: move |s| draft.set(s),
///         onsubmit: move |term| run_search(term),
///     }
/// }
/// ```
#[component]
pub fn SearchBar(props: SearchBarProps) -> Element {
    let value = props.value.clone();

    rsx! {
        form {
            class: "search-bar",
            onsubmit: move |e| {
                e.prevent_default();
                props.onsubmit.call(normalize_term(&value));
            },
            input {
                class: "input-field search-input",
                r#type: "search",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                "aria-label": "Search Pokémon cards by name",
                oninput: move |e| props.oninput.call(e.value()),
            }
            Button {
                variant: ButtonVariant::Primary,
                button_type: "submit".to_string(),
                "Search"
            }
        }
    }
}

/// Trim a search draft and collapse internal whitespace runs
pub fn normalize_term(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_term_trims_and_collapses() {
        assert_eq!(normalize_term("  mr   mime "), "mr mime");
        assert_eq!(normalize_term("\t"), "");
        assert_eq!(normalize_term("pikachu"), "pikachu");
    }
}
