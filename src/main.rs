#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod platform;
mod theme;

use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use holocard_core::api::{ClientConfig, API_KEY_ENV, DEFAULT_API_BASE};
use holocard_core::TcgClient;

/// Global card API client, built from command line options
static CLIENT: OnceLock<TcgClient> = OnceLock::new();

/// Card to open instead of the gallery, consumed on first use
static INITIAL_CARD: Mutex<Option<String>> = Mutex::new(None);

/// Take the `--card` id, if any. Returns `Some` at most once per process.
pub fn take_initial_card() -> Option<String> {
    INITIAL_CARD.lock().ok().and_then(|mut card| card.take())
}

/// Get the card API client (configured from command line or defaults)
pub fn get_client() -> TcgClient {
    CLIENT.get().cloned().unwrap_or_else(|| {
        TcgClient::new(ClientConfig::from_env()).unwrap_or_else(|e| {
            tracing::error!("Failed to build default card client: {}", e);
            std::process::exit(1)
        })
    })
}

/// Holocard - Holographic Pokémon TCG card viewer
#[derive(Parser, Debug)]
#[command(name = "holocard-desktop")]
#[command(about = "Browse Pokémon TCG cards and view them with a holographic tilt effect")]
struct Args {
    /// Open this card (e.g. base4-4) instead of the gallery
    #[arg(long)]
    card: Option<String>,

    /// Card API base URL
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Card API key (raises the upstream rate limit)
    #[arg(long, env = API_KEY_ENV)]
    api_key: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 15)]
    timeout: u64,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let config = ClientConfig {
        base_url: args.api_base.clone(),
        api_key: args.api_key.clone().filter(|k| !k.is_empty()),
        timeout: Duration::from_secs(args.timeout),
    };

    match TcgClient::new(config) {
        Ok(client) => {
            tracing::info!(
                "Starting Holocard against {} (api key: {})",
                client.config().base_url,
                if client.config().api_key.is_some() { "set" } else { "none" }
            );
            let _ = CLIENT.set(client);
        }
        Err(e) => {
            tracing::error!("Failed to build card client: {}", e);
            std::process::exit(1);
        }
    }

    if let Some(id) = args.card.clone().filter(|id| !id.trim().is_empty()) {
        if let Ok(mut slot) = INITIAL_CARD.lock() {
            *slot = Some(id.trim().to_string());
        }
    }

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Pokémon TCG Holographic Cards")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
