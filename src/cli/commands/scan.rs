//! CLI implementation for `emotecache scan`
//!
//! Runs the startup scan on its own and reports what it recognized.

use anyhow::Result;

/// Execute the scan command
pub async fn execute(cache_dir: Option<&str>) -> Result<()> {
    let cache = super::build_cache(cache_dir, None);

    let found = cache.bootstrap();

    println!(
        "✓ Recognized {found} cached emote(s) in {}",
        cache.root().display()
    );
    Ok(())
}
