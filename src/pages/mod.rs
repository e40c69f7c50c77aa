//! Page components for Holocard.

mod gallery;
mod holo;

pub use gallery::Gallery;
pub use holo::{Holo, HoloById};
