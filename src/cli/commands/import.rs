//! CLI implementation for `emotecache import`
//!
//! Reads a JSON array of emote references and caches the whole batch,
//! skipping anything already present.

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::output;
use crate::core::cache::EmoteRef;
use crate::core::size::EmoteSize;

/// Execute the import command
pub async fn execute(file: &Path, size: Option<EmoteSize>, cache_dir: Option<&str>) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let emotes: Vec<EmoteRef> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    if emotes.is_empty() {
        println!("✓ Nothing to import");
        return Ok(());
    }

    let cache = super::build_cache(cache_dir, size);
    cache.bootstrap();

    let spinner = output::create_spinner(&format!("Caching {} emote(s)...", emotes.len()));
    let summary = cache.cache_all(&emotes).await;
    spinner.finish_and_clear();

    if summary.newly_cached() > 0 {
        println!("✓ Downloaded {} emote(s):", summary.newly_cached());
        for path in &summary.downloaded {
            println!("    {}", path.display());
        }
    }

    if summary.skipped > 0 {
        println!("  Skipped {} emote(s) (already cached)", summary.skipped);
    }

    if !summary.failed.is_empty() {
        println!("✗ Failed to cache {} emote(s):", summary.failed.len());
        for (id, error) in &summary.failed {
            println!("    {id}: {error}");
        }
    }

    Ok(())
}
