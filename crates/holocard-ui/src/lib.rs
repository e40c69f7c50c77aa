//! Holocard UI Components
//!
//! Dioxus components shared by the gallery and the holographic detail view.
//!
//! ## Design
//!
//! Dark, saturated holo-foil palette:
//! - **Violet (#8b5cf6)**: primary actions, selected filters
//! - **Cyan (#22d3ee)**: secondary accents, card types
//! - **Night (#1a1a2e)**: page background
//!
//! Styling lives in the application's global stylesheet; components only
//! emit class names plus the inline styles the shading layers compute.

pub mod components;

pub use components::*;
