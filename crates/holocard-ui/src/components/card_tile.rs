//! Card Grid Component
//!
//! Gallery grid of card thumbnails. Hovering a tile reveals the static
//! (untilted) border gradient.

use dioxus::prelude::*;
use holocard_core::shading::{compute_layers, Layer};
use holocard_core::Card;

/// One gallery tile
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CardTile {
///         card: card.clone(),
///         on_open: move |id| navigator.push(Route::HoloById { id }),
///     }
/// }
/// ```
#[component]
pub fn CardTile(
    card: Card,
    /// Called with the card id when the tile is activated
    on_open: EventHandler<String>,
) -> Element {
    let border_style = compute_layers(0.0, 0.0).border.to_style();
    let id = card.id.clone();
    let hp = card.hp_label().to_string();
    let kind = card.type_label().to_string();

    rsx! {
        div {
            class: "card-tile",
            role: "link",
            tabindex: "0",
            onclick: move |_| on_open.call(id.clone()),
            div { class: "card-tile__border", style: "{border_style}" }
            div { class: "card-tile__body",
                img {
                    class: "card-tile__img",
                    src: "{card.images.small}",
                    alt: "{card.name}",
                    width: "245",
                    height: "342",
                }
                div { class: "card-tile__meta",
                    h3 { class: "card-tile__name", "{card.name}" }
                    div { class: "card-tile__stats",
                        span { class: "card-tile__hp", "HP: {hp}" }
                        span { class: "card-tile__type", "{kind}" }
                    }
                    div { class: "card-tile__set", "{card.set.name} • #{card.number}" }
                    if let Some(rarity) = &card.rarity {
                        div { class: "card-tile__rarity", "{rarity}" }
                    }
                }
            }
        }
    }
}

/// Grid of tiles; renders nothing for an empty list
#[component]
pub fn CardGrid(cards: Vec<Card>, on_open: EventHandler<String>) -> Element {
    if cards.is_empty() {
        return VNode::empty();
    }

    rsx! {
        div { class: "card-grid",
            for card in cards.iter() {
                CardTile {
                    key: "{card.id}",
                    card: card.clone(),
                    on_open: on_open,
                }
            }
        }
    }
}
