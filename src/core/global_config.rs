//! Global configuration management
//!
//! Reads and manages settings from `config.toml` in the config directory:
//! the cache directory override, the requested emote size, and the CDN base
//! URL.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::urls;
use crate::core::size::EmoteSize;
use crate::infra::dirs::EmotecacheDirs;

/// Global configuration error types
#[derive(Error, Debug)]
pub enum GlobalConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: String, error: String },
}

/// Global configuration for emotecache
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Remote source settings
    #[serde(default)]
    pub remote: RemoteConfig,
}

/// Cache configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache directory override; empty or whitespace means "use default"
    pub directory: Option<String>,

    /// Requested emote size in pixels
    pub size: Option<u32>,
}

/// Remote source configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Custom CDN base URL
    pub cdn_url: Option<String>,
}

impl GlobalConfig {
    /// Load global configuration from the config directory
    ///
    /// If the config file doesn't exist, returns default configuration.
    /// If the config file exists but is invalid, returns an error.
    pub fn load(dirs: &EmotecacheDirs) -> Result<Self, GlobalConfigError> {
        let config_path = dirs.global_config_path();
        Self::load_from_path(&config_path)
    }

    /// Load global configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, GlobalConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| GlobalConfigError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| GlobalConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Save global configuration to the config directory
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self, dirs: &EmotecacheDirs) -> Result<(), GlobalConfigError> {
        let config_path = dirs.global_config_path();
        self.save_to_path(&config_path)
    }

    /// Save global configuration to a specific path
    ///
    /// Creates parent directories if they don't exist.
    pub fn save_to_path(&self, path: &Path) -> Result<(), GlobalConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| GlobalConfigError::ReadError {
                path: parent.display().to_string(),
                error: e.to_string(),
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| GlobalConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        fs::write(path, content).map_err(|e| GlobalConfigError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Effective cache directory override, if any
    ///
    /// An unset, empty, or whitespace-only value means "use the default".
    #[must_use]
    pub fn cache_directory(&self) -> Option<&str> {
        self.cache
            .directory
            .as_deref()
            .map(str::trim)
            .filter(|dir| !dir.is_empty())
    }

    /// Effective emote size
    ///
    /// Unsupported values fall back to the default.
    #[must_use]
    pub fn emote_size(&self) -> EmoteSize {
        match self.cache.size {
            None => EmoteSize::default(),
            Some(value) => EmoteSize::try_from(value).unwrap_or_else(|e| {
                tracing::warn!("{e}, using default");
                EmoteSize::default()
            }),
        }
    }

    /// Effective CDN base URL
    ///
    /// Returns the custom URL if set, otherwise returns the default.
    #[must_use]
    pub fn cdn_url(&self) -> &str {
        self.remote.cdn_url.as_deref().unwrap_or(urls::EMOTE_CDN)
    }
}
