//! Core domain types for Podcastr.

pub mod common;
pub mod episode;

pub use common::Duration;
pub use episode::Episode;
