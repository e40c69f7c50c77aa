//! Reusable UI components
//!
//! All components are stateless: state lives in the pages that use them.

mod button;
mod card_tile;
mod holo_card;
mod input;
mod pager;
mod status;
mod type_pills;

pub use button::*;
pub use card_tile::*;
pub use holo_card::*;
pub use input::*;
pub use pager::*;
pub use status::*;
pub use type_pills::*;
