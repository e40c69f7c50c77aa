//! Gallery page - Entry point to Holocard.
//!
//! Search by name, filter by type, page through results, and open any card
//! in the holographic view.

use dioxus::prelude::*;
use holocard_core::{CardPage, CardQuery, CardSource, TypeFilter};
use holocard_ui::{
    CardGrid, EmptyState, LoadState, LoadingIndicator, Pager, SearchBar, TypePills,
};

use crate::app::Route;
use crate::components::{GalleryHero, SiteFooter};
use crate::context::use_card_client;

/// Gallery page component.
#[component]
pub fn Gallery() -> Element {
    let navigator = use_navigator();
    let client = use_card_client();

    // Honour --card once, on the first visit
    use_effect(move || {
        if let Some(id) = crate::take_initial_card() {
            tracing::info!(card_id = %id, "Opening card from command line");
            navigator.replace(Route::HoloById { id });
        }
    });

    let mut draft = use_signal(String::new);
    let mut query = use_signal(CardQuery::default);

    // Refetch whenever the query changes
    let results = use_resource(move || {
        let client = client.clone();
        let query = query();
        async move {
            match client.search(&query).await {
                Ok(page) => {
                    tracing::info!(
                        "Loaded page {} ({} cards of {})",
                        page.page,
                        page.cards.len(),
                        page.total_count
                    );
                    page
                }
                Err(e) => {
                    tracing::error!("Failed to fetch cards: {}", e);
                    CardPage {
                        page: query.page,
                        ..Default::default()
                    }
                }
            }
        }
    });

    let submit_search = move |term: String| {
        draft.set(term.clone());
        let card_type = query.peek().card_type.clone();
        query.set(CardQuery {
            term,
            card_type,
            page: 1,
        });
    };

    let select_type = move |filter: TypeFilter| {
        let mut q = query.write();
        q.card_type = filter;
        q.page = 1;
    };

    let change_page = move |page: u32| {
        let next = query.peek().with_page(page);
        query.set(next);
    };

    let open_card = move |id: String| {
        navigator.push(Route::HoloById { id });
    };

    // A refetch keeps the previous page around; show loading until it lands
    let pending = matches!(*results.state().read(), UseResourceState::Pending);
    let page = results.cloned();
    let state = LoadState::resolve(pending, page.as_ref().map(|p| p.cards.len()));
    let selected = query.read().card_type.clone();

    rsx! {
        div { class: "gallery-page",
            GalleryHero {
                div { class: "gallery-controls",
                    SearchBar {
                        value: draft(),
                        oninput: move |s: String| draft.set(s),
                        onsubmit: submit_search,
                    }
                    TypePills {
                        selected: selected,
                        on_select: select_type,
                    }
                }
            }

            section {
                class: "gallery-results",
                "aria-busy": state.is_loading(),
                {match (state, page) {
                    (LoadState::Ready, Some(p)) => rsx! {
                        CardGrid { cards: p.cards.clone(), on_open: open_card }
                        Pager {
                            page: p.page.max(1),
                            page_count: p.page_count(),
                            has_previous: p.has_previous(),
                            has_next: p.has_next(),
                            on_change: change_page,
                        }
                    },
                    (LoadState::Empty, _) => rsx! {
                        EmptyState {}
                    },
                    _ => rsx! {
                        LoadingIndicator { label: "Loading Pokémon cards...".to_string() }
                    },
                }}
            }

            SiteFooter {}
        }
    }
}
