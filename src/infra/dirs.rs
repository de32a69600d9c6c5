//! Platform-specific directory management
//!
//! Provides platform-specific paths for cache, config, and data directories.
//! Follows XDG Base Directory Specification on Linux and standard locations
//! on macOS.
//!
//! Environment variables can override default directories:
//! - `EMOTECACHE_CACHE_DIR` - Override cache directory
//! - `EMOTECACHE_CONFIG_DIR` - Override config directory
//! - `EMOTECACHE_DATA_DIR` - Override data directory

use std::env;
use std::path::PathBuf;

/// Environment variable names for directory overrides
pub const ENV_CACHE_DIR: &str = "EMOTECACHE_CACHE_DIR";
pub const ENV_CONFIG_DIR: &str = "EMOTECACHE_CONFIG_DIR";
pub const ENV_DATA_DIR: &str = "EMOTECACHE_DATA_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "emotecache";

/// Subdirectory of the data dir holding cached emotes
const EMOTES_SUBDIR: &str = "emotes";

/// Platform-specific directory provider for emotecache
///
/// Provides paths to cache, config, and data directories following
/// platform conventions (XDG on Linux, Library on macOS).
#[derive(Debug, Clone)]
pub struct EmotecacheDirs {
    cache_dir: PathBuf,
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl EmotecacheDirs {
    /// Create a new `EmotecacheDirs` instance
    ///
    /// Checks environment variables first, then falls back to platform
    /// defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache_dir: Self::resolve_cache_dir(),
            config_dir: Self::resolve_config_dir(),
            data_dir: Self::resolve_data_dir(),
        }
    }

    /// Get the cache directory path
    #[must_use]
    pub fn cache_dir(&self) -> PathBuf {
        self.cache_dir.clone()
    }

    /// Get the config directory path
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Get the data directory path
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone()
    }

    /// Get the default emotes directory
    ///
    /// Cached emotes are persistent data (they are never re-fetched once
    /// written), so they live under the data directory.
    #[must_use]
    pub fn emotes_dir(&self) -> PathBuf {
        self.data_dir.join(EMOTES_SUBDIR)
    }

    /// Get the global config file path
    ///
    /// Returns the path to `config.toml` in the config directory.
    #[must_use]
    pub fn global_config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Resolve cache directory from environment or platform default
    fn resolve_cache_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CACHE_DIR) {
            return PathBuf::from(path);
        }

        Self::platform_cache_dir()
    }

    /// Resolve config directory from environment or platform default
    fn resolve_config_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CONFIG_DIR) {
            return PathBuf::from(path);
        }

        Self::platform_config_dir()
    }

    /// Resolve data directory from environment or platform default
    fn resolve_data_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_DATA_DIR) {
            return PathBuf::from(path);
        }

        Self::platform_data_dir()
    }

    /// Get platform-specific cache directory
    fn platform_cache_dir() -> PathBuf {
        dirs::cache_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                // Fallback to home directory
                dirs::home_dir()
                    .map(|h| h.join(".cache").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".cache").join(APP_NAME))
            })
    }

    /// Get platform-specific config directory
    fn platform_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                // Fallback to home directory
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }

    /// Get platform-specific data directory
    fn platform_data_dir() -> PathBuf {
        dirs::data_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                // Fallback to home directory
                dirs::home_dir()
                    .map(|h| h.join(".local").join("share").join(APP_NAME))
                    .unwrap_or_else(|| {
                        PathBuf::from(".")
                            .join(".local")
                            .join("share")
                            .join(APP_NAME)
                    })
            })
    }
}

impl Default for EmotecacheDirs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_new_creates_instance() {
        let dirs = EmotecacheDirs::new();
        assert!(!dirs.cache_dir().as_os_str().is_empty());
        assert!(!dirs.config_dir().as_os_str().is_empty());
        assert!(!dirs.data_dir().as_os_str().is_empty());
    }

    #[test]
    fn test_emotes_dir_is_under_data_dir() {
        let dirs = EmotecacheDirs::new();
        assert!(dirs.emotes_dir().starts_with(dirs.data_dir()));
        assert!(dirs.emotes_dir().ends_with(EMOTES_SUBDIR));
    }

    #[test]
    fn test_global_config_path_is_under_config_dir() {
        let dirs = EmotecacheDirs::new();
        assert!(dirs.global_config_path().starts_with(dirs.config_dir()));
        assert!(dirs.global_config_path().ends_with("config.toml"));
    }
}
