//! Pokémon TCG API client.
//!
//! Two operations back the application:
//!
//! - single card lookup (`GET /cards/{id}`), or a representative default
//!   when no id is given
//! - paged listing (`GET /cards?q=...&page=...&pageSize=24`)
//!
//! The detail view never sees an error: [`load_card`] substitutes
//! [`Card::fallback`] for any failure.

use std::future::Future;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{HoloError, HoloResult};
use crate::types::{Card, CardPage, CardQuery};

/// Public API root
pub const DEFAULT_API_BASE: &str = "https://api.pokemontcg.io/v2";

/// Environment variable consulted for an API key
pub const API_KEY_ENV: &str = "POKEMONTCG_API_KEY";

/// Query used when no card id is requested
const DEFAULT_CARD_QUERY: &str = "name:charizard";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Sent as `X-Api-Key` when present; raises the upstream rate limit
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            api_key: None,
            timeout: Duration::from_secs(15),
        }
    }
}

impl ClientConfig {
    /// Default configuration with the API key taken from the environment
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        if api_key.is_some() {
            self.api_key = api_key;
        }
        self
    }
}

/// Anything that can supply cards
pub trait CardSource {
    /// One card by id, or the representative default when `id` is `None`
    fn fetch_card(&self, id: Option<&str>) -> impl Future<Output = HoloResult<Card>>;

    /// One page of listing results
    fn search(&self, query: &CardQuery) -> impl Future<Output = HoloResult<CardPage>>;
}

#[derive(Deserialize)]
struct SingleCard {
    data: Card,
}

#[derive(Deserialize)]
struct CardList {
    data: Vec<Card>,
}

/// HTTP client for the Pokémon TCG API
#[derive(Debug, Clone)]
pub struct TcgClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl TcgClient {
    pub fn new(config: ClientConfig) -> HoloResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| HoloError::Network(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Endpoint URL under the API base. Each segment is percent-encoded as
    /// a single path segment.
    fn endpoint(&self, segments: &[&str]) -> HoloResult<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.config.base_url)
            .map_err(|e| HoloError::InvalidUrl(format!("{}: {}", self.config.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| HoloError::InvalidUrl(self.config.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get(&self, segments: &[&str]) -> HoloResult<reqwest::RequestBuilder> {
        let request = self.http.get(self.endpoint(segments)?);
        Ok(match &self.config.api_key {
            Some(key) => request.header("X-Api-Key", key),
            None => request,
        })
    }

    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> HoloResult<T> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HoloError::Http(status.as_u16()));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl CardSource for TcgClient {
    async fn fetch_card(&self, id: Option<&str>) -> HoloResult<Card> {
        match id {
            Some(id) => {
                tracing::debug!(card_id = %id, "Fetching card");
                let single: SingleCard = self.send(self.get(&["cards", card_segment(id)?])?).await?;
                Ok(single.data)
            }
            None => {
                tracing::debug!("Fetching default card");
                let request = self.get(&["cards"])?.query(&[
                    ("q", DEFAULT_CARD_QUERY),
                    ("orderBy", "-set.releaseDate"),
                ]);
                let list: CardList = self.send(request).await?;
                pick_default(list.data)
            }
        }
    }

    async fn search(&self, query: &CardQuery) -> HoloResult<CardPage> {
        tracing::debug!(term = %query.term, page = query.page, "Searching cards");
        let request = self.get(&["cards"])?.query(&query.to_params());
        let page: CardPage = self.send(request).await?;
        Ok(retain_listable(page))
    }
}

/// Validate a card id for use as one path segment.
///
/// Dot segments are dropped by URL normalization, so they could never name
/// a card.
pub fn card_segment(id: &str) -> HoloResult<&str> {
    match id.trim() {
        "" | "." | ".." => Err(HoloError::InvalidCardId(id.to_string())),
        trimmed => Ok(trimmed),
    }
}

/// Most recent card with usable artwork, else the first card.
pub fn pick_default(cards: Vec<Card>) -> HoloResult<Card> {
    let mut cards = cards.into_iter();
    let first = cards.next().ok_or(HoloError::NoCards)?;
    if first.has_large_image() {
        return Ok(first);
    }
    Ok(cards.find(Card::has_large_image).unwrap_or(first))
}

/// Drop cards the gallery cannot show a thumbnail for
pub fn retain_listable(mut page: CardPage) -> CardPage {
    page.cards.retain(Card::has_small_image);
    page
}

/// Load a card for the detail view, never failing.
///
/// Errors and cards without a large image are logged and replaced by
/// [`Card::fallback`].
pub async fn load_card<S: CardSource>(source: &S, id: Option<&str>) -> Card {
    let result = source.fetch_card(id).await.and_then(|card| {
        if card.has_large_image() {
            Ok(card)
        } else {
            Err(HoloError::MissingImage(card.id))
        }
    });

    match result {
        Ok(card) => {
            tracing::info!(card_id = %card.id, "Loaded card {}", card.name);
            card
        }
        Err(e) => {
            tracing::warn!("Failed to fetch card data, using fallback: {}", e);
            Card::fallback()
        }
    }
}
