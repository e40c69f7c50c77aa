use dioxus::prelude::*;

use crate::context::get_client;
use crate::pages::{Gallery, Holo, HoloById};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Gallery with search, type filter and pagination
/// - `/holo` - Holographic view of the default card
/// - `/holo/:id` - Holographic view of a specific card
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Gallery {},
    #[route("/holo")]
    Holo {},
    #[route("/holo/:id")]
    HoloById { id: String },
}

/// Root application component.
///
/// Provides global styles, the card client context, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(get_client);

    rsx! {
        document::Title { "Pokémon TCG Holographic Cards | Interactive 3D Card Viewer" }
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
