//! Application state management.

pub mod navigation;
pub mod player;

pub use navigation::{Navigation, Route};
pub use player::{use_player, PlayerContext};
