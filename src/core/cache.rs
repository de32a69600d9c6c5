//! The caching engine
//!
//! [`EmoteCache`] owns the resolved cache root, the dedup tracker, and the
//! fetcher. Each emote is downloaded at most once: the in-memory tracker is
//! consulted first, then the filesystem, and only then the network.
//!
//! Failures never escape a cache operation. They are logged, reported as
//! [`CacheOutcome::Failed`], and the tracker is only updated once a file is
//! confirmed on disk, so a failed attempt is retried the next time the same
//! emote shows up.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::core::paths;
use crate::core::size::EmoteSize;
use crate::core::tracker::SeenEmotes;
use crate::error::CacheError;
use crate::infra::download::EmoteFetcher;
use crate::infra::filesystem;

/// One emote reference extracted from a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmoteRef {
    /// Opaque numeric ID assigned by the remote source
    pub id: String,
    /// Display name
    pub name: String,
    /// Collection (server) the emote belongs to
    pub collection: String,
}

/// Outcome of a single cache operation
#[derive(Debug)]
pub enum CacheOutcome {
    /// Downloaded and written to disk
    Downloaded {
        /// Where the emote landed
        path: PathBuf,
    },
    /// Skipped without any I/O: the ID was already tracked
    AlreadyTracked,
    /// Skipped: the file was already on disk and the tracker now knows it
    AlreadyOnDisk {
        /// The pre-existing file
        path: PathBuf,
    },
    /// The operation failed; the tracker was left untouched
    Failed {
        /// Why, for display to the caller
        reason: String,
    },
}

impl CacheOutcome {
    /// Whether this operation added a new file to the cache
    pub fn newly_cached(&self) -> bool {
        matches!(self, Self::Downloaded { .. })
    }

    /// Path of the cached file, when one is known
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Downloaded { path } | Self::AlreadyOnDisk { path } => Some(path),
            Self::AlreadyTracked | Self::Failed { .. } => None,
        }
    }
}

/// Result of caching one batch of emote references
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Paths of newly downloaded emotes, in input order
    pub downloaded: Vec<PathBuf>,
    /// Number of references skipped because they were already cached
    pub skipped: usize,
    /// Failed IDs with error messages
    pub failed: Vec<(String, String)>,
}

impl BatchSummary {
    /// Number of emotes newly written to disk
    pub fn newly_cached(&self) -> usize {
        self.downloaded.len()
    }
}

/// Local disk cache for remote emotes
///
/// Construct one instance per cache root. All methods take `&self`, so a
/// host may drive several batches concurrently; operations on the same
/// emote ID are serialized internally.
pub struct EmoteCache {
    root: PathBuf,
    size: EmoteSize,
    fetcher: EmoteFetcher,
    seen: Mutex<SeenEmotes>,
    in_flight: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl EmoteCache {
    /// Create a cache rooted at `root`, fetching from the default CDN
    pub fn new(root: PathBuf, size: EmoteSize) -> Self {
        Self::with_fetcher(root, size, EmoteFetcher::new())
    }

    /// Create a cache with a custom fetcher
    pub fn with_fetcher(root: PathBuf, size: EmoteSize, fetcher: EmoteFetcher) -> Self {
        Self {
            root,
            size,
            fetcher,
            seen: Mutex::new(SeenEmotes::new()),
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// The cache root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The size requested from the CDN
    pub fn size(&self) -> EmoteSize {
        self.size
    }

    /// Whether an ID is currently tracked as cached
    pub fn is_tracked(&self, id: &str) -> bool {
        self.seen.lock().contains(id)
    }

    /// Number of IDs currently tracked
    pub fn tracked(&self) -> usize {
        self.seen.lock().len()
    }

    /// Rebuild the tracker from files already on disk
    ///
    /// Ensures the root exists, then walks `<root>/<collection>/` and
    /// recovers IDs from the `-<id>.png` filename suffix; other files are
    /// ignored. Returns the number of IDs newly recognized.
    ///
    /// The scan never fails: a listing error skips the affected collection
    /// and the scan carries on with whatever it has. The worst case of a
    /// degraded scan is a redundant download later, never corruption,
    /// because the on-disk existence check stands on its own.
    pub fn bootstrap(&self) -> usize {
        if let Err(e) = filesystem::create_dir_all(&self.root) {
            tracing::warn!("Cache scan aborted: {e}");
            return 0;
        }

        let entries = match filesystem::list_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Cache scan aborted: {e}");
                return 0;
            }
        };

        let mut found = Vec::new();
        for collection in entries.iter().filter(|p| p.is_dir()) {
            let files = match filesystem::list_dir(collection) {
                Ok(files) => files,
                Err(e) => {
                    tracing::warn!("Skipping collection during cache scan: {e}");
                    continue;
                }
            };

            for file in files {
                let Some(name) = file.file_name().and_then(|n| n.to_str()) else {
                    continue;
                };
                if let Some(id) = paths::parse_emote_filename(name) {
                    found.push(id.to_string());
                }
            }
        }

        let added = self.seen.lock().extend(found);
        tracing::info!(
            "Recognized {added} cached emote(s) under {}",
            self.root.display()
        );
        added
    }

    /// Cache a single emote, downloading it only if needed
    ///
    /// The tracker is checked first (no I/O on a hit), then the filesystem
    /// (a pre-existing file is adopted into the tracker rather than
    /// re-downloaded), and only then is the emote fetched.
    pub async fn cache_one(&self, emote: &EmoteRef) -> CacheOutcome {
        if self.seen.lock().contains(&emote.id) {
            tracing::debug!("Emote {} ({}) already tracked", emote.id, emote.name);
            return CacheOutcome::AlreadyTracked;
        }

        // Serialize concurrent operations on the same ID
        let guard = self.lock_id(&emote.id).await;

        // Another task may have cached it while we waited for the lock
        if self.seen.lock().contains(&emote.id) {
            drop(guard);
            self.release_id(&emote.id);
            return CacheOutcome::AlreadyTracked;
        }

        let path = paths::emote_path(&self.root, &emote.collection, &emote.name, &emote.id);

        let outcome = if path.exists() {
            // A file from a previous run the scan missed; adopt it
            self.seen.lock().insert(&emote.id);
            tracing::debug!("Emote {} already on disk at {}", emote.id, path.display());
            CacheOutcome::AlreadyOnDisk { path }
        } else {
            match self.download(emote, &path).await {
                Ok(()) => {
                    self.seen.lock().insert(&emote.id);
                    tracing::info!(
                        "Cached emote {} ({}) to {}",
                        emote.id,
                        emote.name,
                        path.display()
                    );
                    CacheOutcome::Downloaded { path }
                }
                Err(e) => {
                    tracing::warn!("Failed to cache emote {} ({}): {e}", emote.id, emote.name);
                    CacheOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            }
        };

        drop(guard);
        self.release_id(&emote.id);
        outcome
    }

    /// Cache a batch of emote references
    ///
    /// References are processed strictly in input order, one at a time;
    /// sequential processing keeps the load on the remote source to one
    /// request at a time. Per-item failures are collected, not propagated.
    pub async fn cache_all(&self, emotes: &[EmoteRef]) -> BatchSummary {
        let mut summary = BatchSummary::default();

        for emote in emotes {
            match self.cache_one(emote).await {
                CacheOutcome::Downloaded { path } => summary.downloaded.push(path),
                CacheOutcome::AlreadyTracked | CacheOutcome::AlreadyOnDisk { .. } => {
                    summary.skipped += 1;
                }
                CacheOutcome::Failed { reason } => {
                    summary.failed.push((emote.id.clone(), reason));
                }
            }
        }

        summary
    }

    async fn download(&self, emote: &EmoteRef, dest: &Path) -> Result<(), CacheError> {
        let dir = paths::collection_dir(&self.root, &emote.collection);
        filesystem::create_dir_all(&dir)?;
        self.fetcher.fetch(&emote.id, self.size, dest).await?;
        Ok(())
    }

    /// Acquire the per-ID lock, creating it on first use
    async fn lock_id(&self, id: &str) -> tokio::sync::OwnedMutexGuard<()> {
        let lock = {
            let mut in_flight = self.in_flight.lock();
            in_flight
                .entry(id.to_string())
                .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }

    /// Drop the per-ID lock entry once nobody holds or waits on it
    fn release_id(&self, id: &str) {
        let mut in_flight = self.in_flight.lock();
        let idle = in_flight
            .get(id)
            .is_some_and(|lock| Arc::strong_count(lock) == 1);
        if idle {
            in_flight.remove(id);
        }
    }
}
