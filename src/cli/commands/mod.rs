//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod fetch;
pub mod import;
pub mod scan;
pub mod status;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

use crate::core::cache::EmoteCache;
use crate::core::global_config::GlobalConfig;
use crate::core::paths;
use crate::core::size::EmoteSize;
use crate::infra::dirs::EmotecacheDirs;
use crate::infra::download::EmoteFetcher;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download a single emote into the cache
    Fetch {
        /// Emote ID (digits assigned by the remote source)
        id: String,

        /// Emote display name
        name: String,

        /// Collection the emote belongs to
        collection: String,

        /// Requested size in pixels (48, 64, 96, 128, 256)
        #[arg(short, long)]
        size: Option<EmoteSize>,

        /// Cache directory override
        #[arg(long, value_name = "DIR")]
        cache_dir: Option<String>,
    },

    /// Cache a batch of emotes from a JSON file
    Import {
        /// Path to a JSON array of {id, name, collection} objects
        file: PathBuf,

        /// Requested size in pixels (48, 64, 96, 128, 256)
        #[arg(short, long)]
        size: Option<EmoteSize>,

        /// Cache directory override
        #[arg(long, value_name = "DIR")]
        cache_dir: Option<String>,
    },

    /// Scan the cache directory and report recognized emotes
    Scan {
        /// Cache directory override
        #[arg(long, value_name = "DIR")]
        cache_dir: Option<String>,
    },

    /// Show cache location and statistics
    Status {
        /// Cache directory override
        #[arg(long, value_name = "DIR")]
        cache_dir: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration subcommands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Print the config file location
    Path,
}

impl Commands {
    /// Execute the command
    pub async fn run(self) -> Result<()> {
        match self {
            Self::Fetch {
                id,
                name,
                collection,
                size,
                cache_dir,
            } => fetch::execute(&id, &name, &collection, size, cache_dir.as_deref()).await,
            Self::Import {
                file,
                size,
                cache_dir,
            } => import::execute(&file, size, cache_dir.as_deref()).await,
            Self::Scan { cache_dir } => scan::execute(cache_dir.as_deref()).await,
            Self::Status { cache_dir, json } => status::execute(cache_dir.as_deref(), json).await,
            Self::Config { command } => match command {
                ConfigCommands::Show => config::execute_show().await,
                ConfigCommands::Path => config::execute_path().await,
            },
        }
    }
}

/// Load the global configuration, falling back to defaults on error
pub(crate) fn effective_config() -> GlobalConfig {
    let dirs = EmotecacheDirs::new();
    match GlobalConfig::load(&dirs) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{e}, using defaults");
            GlobalConfig::default()
        }
    }
}

/// Build a cache from CLI overrides layered over the global configuration
pub(crate) fn build_cache(cache_dir: Option<&str>, size: Option<EmoteSize>) -> EmoteCache {
    let config = effective_config();
    let root = paths::resolve_root(cache_dir.or_else(|| config.cache_directory()));
    let size = size.unwrap_or_else(|| config.emote_size());
    let fetcher = EmoteFetcher::with_base_url(config.cdn_url());
    EmoteCache::with_fetcher(root, size, fetcher)
}
