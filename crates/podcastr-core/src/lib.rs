//! # podcastr-core
//!
//! Core types, playback state, and error handling for the Podcastr player.

pub mod catalog;
pub mod date;
pub mod error;
pub mod playback;
pub mod types;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use playback::PlaybackState;
pub use types::*;
