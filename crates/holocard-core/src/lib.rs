//! Holocard Core Library
//!
//! Pokémon TCG card data plus the tilt-driven holographic shading model.
//!
//! ## Overview
//!
//! A card detail view shows the card artwork under five decorative overlays
//! (border gradient, sparkle field, prismatic sweep, shine band, conic wash).
//! Every overlay is a closed-form function of a two-axis tilt, which comes
//! from device orientation when available and from the pointer otherwise.
//!
//! - [`sampler`]: listener lifecycle and raw input → [`TiltSignal`]
//! - [`shading`]: clamped tilt → [`ShadingLayers`]
//! - [`api`]: card lookup and paged search against the public REST API
//!
//! ## Quick Start
//!
//! ```ignore
//! use holocard_core::{api, ClientConfig, ShadingLayers, TcgClient, TiltSignal};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TcgClient::new(ClientConfig::from_env())?;
//!
//!     // Never fails: network errors yield the fallback Charizard
//!     let card = api::load_card(&client, Some("base4-4")).await;
//!
//!     let layers = ShadingLayers::from_signal(TiltSignal::new(12.0, -8.0));
//!     for (name, style) in layers.styles() {
//!         println!("{}: {}", name, style);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
pub mod sampler;
pub mod shading;
pub mod tilt;
pub mod types;

// Re-exports
pub use api::{load_card, CardSource, ClientConfig, TcgClient};
pub use error::{HoloError, HoloResult};
pub use sampler::{
    InputEvent, InputPlatform, InputSampler, OrientationSupport, PermissionResponse,
    PermissionState, SourceKind, Subscription,
};
pub use shading::{compute_layers, Layer, ShadingLayers};
pub use tilt::{Tilt, TiltSignal};
pub use types::*;
