//! CLI implementation for `emotecache status`
//!
//! Shows where the cache lives and what it holds.

use anyhow::Result;

use crate::core::info::cache_info;
use crate::core::paths;

/// Execute the status command
pub async fn execute(cache_dir: Option<&str>, json: bool) -> Result<()> {
    let config = super::effective_config();
    let root = paths::resolve_root(cache_dir.or_else(|| config.cache_directory()));

    let info = cache_info(&root);

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Location: {}", info.path.display());
    println!("Size: {}", info.format_size());
    println!("Emotes: {}", info.emote_count);
    println!("Collections: {}", info.collection_count);

    if !info.exists {
        println!("\n⚠ Cache directory does not exist yet (empty cache)");
    }

    Ok(())
}
