//! Card client context provider for Holocard.
//!
//! Provides the configured [`TcgClient`] to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(get_client);
//!
//! // In child components
//! let client = use_card_client();
//! let card = load_card(&client, Some("base4-4")).await;
//! ```

use dioxus::prelude::*;
use holocard_core::TcgClient;

/// Get the card client configured from command line args.
pub fn get_client() -> TcgClient {
    crate::get_client()
}

/// Hook to access the card client from context.
///
/// The client is cheap to clone; clone it into each async task.
pub fn use_card_client() -> TcgClient {
    use_context::<TcgClient>()
}
