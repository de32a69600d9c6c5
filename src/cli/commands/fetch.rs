//! CLI implementation for `emotecache fetch`
//!
//! Caches a single emote given on the command line.

use anyhow::Result;

use crate::core::cache::{CacheOutcome, EmoteRef};
use crate::core::size::EmoteSize;

/// Execute the fetch command
pub async fn execute(
    id: &str,
    name: &str,
    collection: &str,
    size: Option<EmoteSize>,
    cache_dir: Option<&str>,
) -> Result<()> {
    let cache = super::build_cache(cache_dir, size);
    cache.bootstrap();

    let emote = EmoteRef {
        id: id.to_string(),
        name: name.to_string(),
        collection: collection.to_string(),
    };

    match cache.cache_one(&emote).await {
        CacheOutcome::Downloaded { path } => {
            println!("✓ Cached {name} to {}", path.display());
            Ok(())
        }
        CacheOutcome::AlreadyTracked => {
            println!("✓ {name} is already cached");
            Ok(())
        }
        CacheOutcome::AlreadyOnDisk { path } => {
            println!("✓ {name} was already on disk at {}", path.display());
            Ok(())
        }
        CacheOutcome::Failed { reason } => {
            anyhow::bail!("Failed to cache {name}: {reason}")
        }
    }
}
