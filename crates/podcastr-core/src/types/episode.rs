//! Episode type representing a single playable podcast item.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use serde::{Deserialize, Serialize};

use super::Duration;

/// A single podcast episode.
///
/// Episodes are plain values: once placed in a queue they are never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Episode {
    /// Episode title.
    pub title: String,
    /// Credited participants, already joined for display.
    #[serde(default)]
    pub members: String,
    /// Thumbnail image URL.
    #[serde(default)]
    pub thumbnail: String,
    /// Episode length.
    #[serde(default)]
    pub duration: Duration,
    /// Playable media URL.
    pub url: String,
}

impl Episode {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            members: String::new(),
            thumbnail: String::new(),
            duration: Duration::default(),
            url: url.into(),
        }
    }

    #[must_use]
    pub fn with_members(mut self, members: impl Into<String>) -> Self {
        self.members = members.into();
        self
    }

    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = thumbnail.into();
        self
    }

    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Get the thumbnail URL, if one is set.
    pub fn thumbnail_url(&self) -> Option<&str> {
        Some(self.thumbnail.as_str()).filter(|t| !t.is_empty())
    }
}
