//! Application-specific components for Holocard.
//!
//! Reusable pieces live in `holocard-ui`; this module only holds page chrome.

mod layout;

pub use layout::{GalleryHero, SiteFooter};
