//! Error types for Holocard

use thiserror::Error;

/// Main error type for Holocard operations
#[derive(Error, Debug)]
pub enum HoloError {
    /// Transport-level failure talking to the card API
    #[error("Network error: {0}")]
    Network(String),

    /// The card API answered with a non-success status
    #[error("HTTP error {0}")]
    Http(u16),

    /// Response body did not match the expected card shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// The configured API base cannot be used as a URL root
    #[error("Invalid API base URL: {0}")]
    InvalidUrl(String),

    /// A card id that cannot name a single card
    #[error("Invalid card id: {0:?}")]
    InvalidCardId(String),

    /// A listing query returned no cards
    #[error("No cards returned")]
    NoCards,

    /// Card has no large image to render
    #[error("Card {0} has no large image")]
    MissingImage(String),

    /// Orientation permission request failed
    #[error("Permission error: {0}")]
    Permission(String),

    /// The platform event bridge failed
    #[error("Bridge error: {0}")]
    Bridge(String),
}

impl From<reqwest::Error> for HoloError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            HoloError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            HoloError::Http(status.as_u16())
        } else {
            HoloError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for HoloError {
    fn from(err: serde_json::Error) -> Self {
        HoloError::Decode(err.to_string())
    }
}

/// Result type alias using HoloError
pub type HoloResult<T> = Result<T, HoloError>;
