//! Holocard CLI
//!
//! Thin wrapper around holocard-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Show the default card (falls back to Base Set Charizard)
//! holocard card
//!
//! # Show a specific card
//! holocard card xy7-54
//!
//! # Search by name and type
//! holocard search pika --type Electric --page 2
//!
//! # Print the overlay styles for a tilt
//! holocard layers --tilt-x 12 --tilt-y -8
//!
//! # Same, derived from a pointer position
//! holocard layers --pointer 200,150 --viewport 800,600 --json
//! ```

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use holocard_core::api::{API_KEY_ENV, DEFAULT_API_BASE};
use holocard_core::{
    load_card, Card, CardPage, CardQuery, CardSource, ClientConfig, ShadingLayers, TcgClient,
    TiltSignal, TypeFilter,
};

/// Holocard - Pokémon TCG cards with holographic shading
#[derive(Parser)]
#[command(name = "holocard")]
#[command(version = "0.1.0")]
#[command(about = "Holocard - Pokémon TCG cards with holographic shading")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Card API base URL
    #[arg(long, global = true, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Card API key
    #[arg(long, global = true, env = API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one card (the default Charizard when no id is given)
    Card {
        /// Card id, e.g. base4-4
        id: Option<String>,
    },

    /// Search the card listing
    Search {
        /// Name prefix to match
        #[arg(default_value = "")]
        term: String,

        /// Restrict to one type (e.g. Fire); "all" for no filter
        #[arg(short = 't', long = "type")]
        card_type: Option<String>,

        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },

    /// Print the five overlay styles for a tilt
    Layers {
        /// Horizontal tilt in degrees (roll)
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        tilt_x: f64,

        /// Vertical tilt in degrees (pitch)
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        tilt_y: f64,

        /// Pointer position as X,Y; overrides --tilt-x/--tilt-y
        #[arg(long, value_parser = parse_pair, requires = "viewport")]
        pointer: Option<(f64, f64)>,

        /// Viewport size as W,H
        #[arg(long, value_parser = parse_pair, requires = "pointer")]
        viewport: Option<(f64, f64)>,

        /// Emit JSON instead of CSS lines
        #[arg(long)]
        json: bool,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Parse a comma separated pair such as `200,150`
fn parse_pair(s: &str) -> std::result::Result<(f64, f64), String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected two comma separated numbers, got '{}'", s))?;
    let a = a
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid number '{}': {}", a.trim(), e))?;
    let b = b
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid number '{}': {}", b.trim(), e))?;
    Ok((a, b))
}

fn build_client(api_base: &str, api_key: Option<String>) -> Result<TcgClient> {
    let config = ClientConfig::default()
        .with_base_url(api_base)
        .with_api_key(api_key.filter(|k| !k.is_empty()));
    let client = TcgClient::new(config).context("Failed to build card API client")?;
    tracing::debug!(base = %client.config().base_url, "Card API client ready");
    Ok(client)
}

fn print_card(card: &Card) {
    println!("{}", card.name);
    println!("  ID: {}", card.id);
    println!("  HP: {}", card.hp_label());
    println!("  Type: {}", card.type_label());
    println!("  Set: {} #{}", card.set.name, card.number);
    if let Some(rarity) = &card.rarity {
        println!("  Rarity: {}", rarity);
    }
    if let Some(attack) = card.primary_attack() {
        println!("  Attack: {} {}", attack.name, attack.damage);
    }
    if let Some(weakness) = card.primary_weakness() {
        println!("  Weakness: {} {}", weakness.kind, weakness.value);
    }
    println!("  Image: {}", card.large_image());
}

fn print_page(page: &CardPage) {
    if page.cards.is_empty() {
        println!("No cards found.");
        return;
    }
    println!(
        "Page {} of {} ({} cards total)",
        page.page.max(1),
        page.page_count(),
        page.total_count
    );
    for card in &page.cards {
        println!("  {:<14} {}", card.id, card);
    }
    if page.has_next() {
        println!();
        println!("More results: --page {}", page.page.max(1) + 1);
    }
}

fn layer_signal(
    tilt_x: f64,
    tilt_y: f64,
    pointer: Option<(f64, f64)>,
    viewport: Option<(f64, f64)>,
) -> Result<TiltSignal> {
    match (pointer, viewport) {
        (Some((x, y)), Some((width, height))) => TiltSignal::from_pointer(x, y, width, height)
            .ok_or_else(|| anyhow!("Viewport must have a positive width and height")),
        (None, None) => Ok(TiltSignal::new(tilt_y, tilt_x)),
        _ => bail!("--pointer and --viewport must be given together"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Card { id } => {
            let client = build_client(&cli.api_base, cli.api_key)?;
            let card = load_card(&client, id.as_deref()).await;
            print_card(&card);
        }

        Commands::Search {
            term,
            card_type,
            page,
        } => {
            let client = build_client(&cli.api_base, cli.api_key)?;
            let query = CardQuery {
                term: term.trim().to_string(),
                card_type: card_type
                    .as_deref()
                    .map(TypeFilter::parse)
                    .unwrap_or_default(),
                page,
            };
            tracing::info!("Searching with {:?}", query.to_params());
            let results = client.search(&query).await?;
            print_page(&results);
        }

        Commands::Layers {
            tilt_x,
            tilt_y,
            pointer,
            viewport,
            json,
        } => {
            let signal = layer_signal(tilt_x, tilt_y, pointer, viewport)?;
            let tilt = signal.clamped();
            let layers = ShadingLayers::from_signal(signal);

            if json {
                let styles: serde_json::Map<String, serde_json::Value> = layers
                    .styles()
                    .into_iter()
                    .map(|(name, style)| (name.to_string(), serde_json::Value::String(style)))
                    .collect();
                let out = serde_json::json!({
                    "tilt": tilt,
                    "layers": layers,
                    "styles": styles,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("Tilt: x={} y={}", tilt.x, tilt.y);
                for (name, style) in layers.styles() {
                    println!();
                    println!("[{}]", name);
                    println!("  {}", style);
                }
            }
        }
    }

    Ok(())
}
