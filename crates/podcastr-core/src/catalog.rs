//! Episode catalog shown on the home page.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::Episode;

/// An ordered list of episodes available for playback.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    pub episodes: Vec<Episode>,
}

impl Catalog {
    pub const fn new(episodes: Vec<Episode>) -> Self {
        Self { episodes }
    }

    /// Parse a catalog from JSON. Accepts either `{"episodes": [...]}` or a
    /// bare array of episodes.
    pub fn from_json(json: &str) -> Result<Self> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Wrapped(Catalog),
            Bare(Vec<Episode>),
        }

        let catalog = match serde_json::from_str::<Raw>(json) {
            Ok(Raw::Wrapped(catalog)) => catalog,
            Ok(Raw::Bare(episodes)) => Self::new(episodes),
            // Re-parse strictly so the caller gets a useful message.
            Err(_) => serde_json::from_str::<Self>(json)?,
        };
        catalog.validate()?;
        debug!("Parsed catalog with {} episodes", catalog.episodes.len());
        Ok(catalog)
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        info!(
            "Loaded {} episodes from {}",
            catalog.episodes.len(),
            path.display()
        );
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        if let Some(index) = self.episodes.iter().position(|e| e.url.trim().is_empty()) {
            return Err(Error::InvalidArgument(format!(
                "episode {index} (\"{}\") has no media url",
                self.episodes[index].title
            )));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// The first `n` episodes, featured as latest releases.
    pub fn latest(&self, n: usize) -> &[Episode] {
        &self.episodes[..n.min(self.episodes.len())]
    }

    /// Everything after the first `n` episodes.
    pub fn rest(&self, n: usize) -> &[Episode] {
        &self.episodes[n.min(self.episodes.len())..]
    }

    /// Position of an episode in the catalog, matched by media url.
    pub fn position_of(&self, episode: &Episode) -> Option<usize> {
        self.episodes.iter().position(|e| e.url == episode.url)
    }
}
