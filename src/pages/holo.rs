//! Holographic card view.
//!
//! Loads one card (falling back to the fixed Charizard on any failure),
//! samples tilt from orientation or pointer input, and paints the shading
//! layers over the artwork.

use dioxus::prelude::*;
use holocard_core::{load_card, InputEvent, InputPlatform, InputSampler, ShadingLayers};
use holocard_ui::{Button, ButtonVariant, CardCaption, CardInfoPanel, HoloCard, LoadingIndicator};

use crate::app::Route;
use crate::context::use_card_client;
use crate::platform::{probe_orientation_support, WebviewPlatform};

type Sampler = InputSampler<WebviewPlatform>;

/// `/holo` - the default card
#[component]
pub fn Holo() -> Element {
    rsx! {
        HoloView { card_id: None }
    }
}

/// `/holo/:id` - a specific card
#[component]
pub fn HoloById(id: String) -> Element {
    rsx! {
        HoloView { card_id: Some(id) }
    }
}

#[component]
fn HoloView(card_id: Option<String>) -> Element {
    let client = use_card_client();

    let card = use_resource(use_reactive((&card_id,), move |(card_id,)| {
        let client = client.clone();
        async move { load_card(&client, card_id.as_deref()).await }
    }));

    let mut sampler: Signal<Option<Sampler>> = use_signal(|| None);

    let sink = use_callback(move |event: InputEvent| {
        if let Some(s) = sampler.write().as_mut() {
            s.handle(&event);
        }
    });

    // Probe the platform once, then register listeners
    use_hook(move || {
        spawn(async move {
            let support = probe_orientation_support().await;
            tracing::debug!("Orientation support: {:?}", support);
            sampler.set(Some(InputSampler::mount(WebviewPlatform::new(support, sink))));
        });
    });

    use_drop(move || {
        if let Ok(mut guard) = sampler.try_write() {
            if let Some(mut s) = guard.take() {
                s.teardown();
            }
        }
    });

    let request_motion = move |_| {
        let platform = {
            let mut guard = sampler.write();
            match guard.as_mut() {
                Some(s) => {
                    if !s.begin_permission_request() {
                        return;
                    }
                    *s.platform()
                }
                None => return,
            }
        };
        spawn(async move {
            let outcome = platform.request_orientation_permission().await;
            if let Some(s) = sampler.write().as_mut() {
                s.finish_permission_request(outcome);
            }
        });
    };

    let (layers, needs_permission) = match sampler.read().as_ref() {
        Some(s) => (ShadingLayers::from_signal(s.signal()), s.needs_permission()),
        None => (ShadingLayers::default(), false),
    };

    let Some(card) = card.cloned() else {
        return rsx! {
            main { class: "holo-page",
                LoadingIndicator { label: "Loading Pokémon Card...".to_string() }
            }
        };
    };

    let image = card.large_image().to_string();
    let alt = format!("{} Card", card.name);

    rsx! {
        main { class: "holo-page",
            Link { class: "holo-back", to: Route::Gallery {}, "‹ All cards" }

            div { class: "holo-instructions",
                div { "Tilt your phone or move your mouse ✨" }
                CardCaption { card: card.clone() }
            }

            HoloCard { image, alt, layers }

            if needs_permission {
                Button {
                    variant: ButtonVariant::Motion,
                    onclick: request_motion,
                    "Tap to enable motion ✨"
                }
            }

            CardInfoPanel { card }
        }
    }
}
