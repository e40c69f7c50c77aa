//! Holographic Card Component
//!
//! Card artwork with the five shading overlays stacked on top. The overlays
//! are pure output of [`ShadingLayers`]; this component only paints them.

use dioxus::prelude::*;
use holocard_core::{Card, ShadingLayers, PLACEHOLDER_IMAGE};

/// Card artwork plus overlays in fixed paint order
///
/// # Example
///
/// ```rust,ignore
/// let layers = ShadingLayers::from_signal(sampler.read().signal());
///
/// rsx! {
///     HoloCard {
///         image: card.large_image().to_string(),
///         alt: format!("{} Card", card.name),
///         layers: layers,
///     }
/// }
/// ```
#[component]
pub fn HoloCard(
    /// Artwork URL
    image: String,
    /// Alt text for accessibility
    alt: String,
    /// Overlays computed for the current tilt
    layers: ShadingLayers,
) -> Element {
    let mut src = use_signal(|| image.clone());

    // Follow prop changes when a different card is loaded
    use_effect(use_reactive((&image,), move |(image,)| src.set(image)));

    let overlays = layers.styles();

    rsx! {
        div { class: "holo-card",
            img {
                class: "holo-card__image",
                src: "{src}",
                alt: "{alt}",
                onerror: move |_| {
                    if src() != PLACEHOLDER_IMAGE {
                        tracing::warn!("Card artwork failed to load, using placeholder");
                        src.set(PLACEHOLDER_IMAGE.to_string());
                    }
                },
            }
            for (name, style) in overlays {
                div {
                    key: "{name}",
                    class: "holo-layer holo-layer--{name}",
                    "aria-hidden": "true",
                    style: "{style}",
                }
            }
        }
    }
}

/// Summary of the displayed card: name, HP and types, first attack, first
/// weakness, set.
#[component]
pub fn CardInfoPanel(card: Card) -> Element {
    let hp = card.hp_label().to_string();
    let types = card.types.join(", ");
    let attack = card
        .primary_attack()
        .map(|a| format!("{} ({})", a.name, a.damage));
    let weakness = card
        .primary_weakness()
        .map(|w| format!("{} {}", w.kind, w.value));

    rsx! {
        aside { class: "card-info",
            h3 { class: "card-info__name", "{card.name}" }
            div { class: "card-info__rows",
                div { "HP: {hp} • Type: {types}" }
                if let Some(attack) = attack {
                    div {
                        strong { "Attack: " }
                        "{attack}"
                    }
                }
                if let Some(weakness) = weakness {
                    div {
                        strong { "Weakness: " }
                        "{weakness}"
                    }
                }
                div { class: "card-info__set", "Set: {card.set.name}" }
            }
        }
    }
}

/// Caption line under the instruction text: `name • set • #number`
#[component]
pub fn CardCaption(card: Card) -> Element {
    let caption = card.to_string();
    rsx! {
        div { class: "card-caption", "{caption}" }
    }
}
