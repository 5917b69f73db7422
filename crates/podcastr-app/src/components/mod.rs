//! UI components shared across pages.

mod header;
pub mod icons;
mod player;

pub use header::Header;
pub use player::Player;
