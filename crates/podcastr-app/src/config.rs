//! Application configuration.
//!
//! Read from `config.json` in the platform config directory, or from the
//! file named by `PODCASTR_CONFIG`. A missing file means defaults.

#![allow(clippy::unwrap_used)] // Tests use unwrap for brevity

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use podcastr_core::{Catalog, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "PODCASTR_CONFIG";

/// Catalog shipped with the binary, used when no catalog path is configured.
const BUNDLED_CATALOG: &str = include_str!("../assets/episodes.json");

/// User-facing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Episode catalog to load instead of the bundled one.
    pub catalog_path: Option<PathBuf>,
    /// Initial window width in logical pixels.
    pub window_width: f64,
    /// Initial window height in logical pixels.
    pub window_height: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            window_width: 1280.0,
            window_height: 800.0,
        }
    }
}

impl AppConfig {
    /// Where the config file is expected to live.
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("com", "podcastr", "Podcastr")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load the config from its default location.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Load and validate a config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(Error::Config(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        Ok(())
    }

    /// Load the configured catalog, falling back to the bundled one.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path),
            None => Catalog::from_json(BUNDLED_CATALOG),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("podcastr-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = AppConfig::default().load_catalog().unwrap();
        assert!(catalog.len() >= 3);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let path = write_temp("partial.json", r#"{ "window_width": 900 }"#);
        let config = AppConfig::load_from(&path).unwrap();
        assert!((config.window_width - 900.0).abs() < f64::EPSILON);
        assert!((config.window_height - 800.0).abs() < f64::EPSILON);
        assert!(config.catalog_path.is_none());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_invalid_window_size() {
        let path = write_temp("invalid.json", r#"{ "window_height": 0 }"#);
        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_custom_catalog_path() {
        let catalog_path = write_temp(
            "catalog.json",
            r#"[{ "title": "Solo", "url": "https://cdn.example.com/solo.m4a" }]"#,
        );
        let config = AppConfig {
            catalog_path: Some(catalog_path.clone()),
            ..AppConfig::default()
        };
        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog.episodes[0].title, "Solo");
        std::fs::remove_file(catalog_path).ok();
    }
}
