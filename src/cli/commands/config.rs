//! CLI implementation for `emotecache config`
//!
//! Shows the effective configuration and where it comes from.

use anyhow::Result;

use crate::core::global_config::GlobalConfig;
use crate::core::paths;
use crate::infra::dirs::EmotecacheDirs;

/// Execute config show
pub async fn execute_show() -> Result<()> {
    let dirs = EmotecacheDirs::new();
    let config = GlobalConfig::load(&dirs)?;

    println!("Config file: {}", dirs.global_config_path().display());
    println!(
        "Cache directory: {}",
        paths::resolve_root(config.cache_directory()).display()
    );
    println!("Emote size: {}", config.emote_size());
    println!("CDN: {}", config.cdn_url());
    Ok(())
}

/// Execute config path
pub async fn execute_path() -> Result<()> {
    println!("{}", EmotecacheDirs::new().global_config_path().display());
    Ok(())
}
