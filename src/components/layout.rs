//! Page chrome for the gallery: hero header and footer.

use dioxus::prelude::*;

/// Gradient hero with the title, tagline, and whatever controls are passed
/// as children.
#[component]
pub fn GalleryHero(children: Element) -> Element {
    rsx! {
        header { class: "gallery-hero",
            div { class: "gallery-hero__glow" }
            div { class: "gallery-hero__inner",
                h1 { class: "gallery-title", "Pokémon TCG" }
                p { class: "gallery-tagline",
                    "Discover holographic trading cards from the Pokémon universe"
                }
                {children}
            }
        }
    }
}

/// Attribution footer
#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { class: "site-footer",
            p { "Powered by Pokémon TCG API" }
            p { class: "site-footer__hint",
                "Discover holographic cards • Click any card to view in 3D"
            }
        }
    }
}
