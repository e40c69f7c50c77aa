//! Visual theme for Holocard.

mod styles;

pub use styles::GLOBAL_STYLES;
