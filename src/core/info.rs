//! On-disk cache statistics
//!
//! Read-only reporting over the cache layout, for the `status` command.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::paths;

/// Summary of what is on disk under the cache root
#[derive(Debug, Serialize)]
pub struct CacheInfo {
    /// Cache root path
    pub path: PathBuf,
    /// Whether the root exists
    pub exists: bool,
    /// Number of collection directories
    pub collection_count: usize,
    /// Number of files with a parseable emote suffix
    pub emote_count: usize,
    /// Total size in bytes of everything under the root
    pub size_bytes: u64,
}

impl CacheInfo {
    /// Format size for display
    pub fn format_size(&self) -> String {
        if self.size_bytes == 0 {
            "0 bytes".to_string()
        } else if self.size_bytes < 1024 {
            format!("{} bytes", self.size_bytes)
        } else if self.size_bytes < 1024 * 1024 {
            format!("{:.1} KB", self.size_bytes as f64 / 1024.0)
        } else if self.size_bytes < 1024 * 1024 * 1024 {
            format!("{:.1} MB", self.size_bytes as f64 / (1024.0 * 1024.0))
        } else {
            format!(
                "{:.1} GB",
                self.size_bytes as f64 / (1024.0 * 1024.0 * 1024.0)
            )
        }
    }
}

/// Gather cache statistics by walking the on-disk layout
pub fn cache_info(root: &Path) -> CacheInfo {
    let exists = root.exists();

    let collection_count = std::fs::read_dir(root)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .filter(|e| e.path().is_dir())
                .count()
        })
        .unwrap_or(0);

    let mut emote_count = 0;
    let mut size_bytes = 0;
    for entry in walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
    {
        if let Some(name) = entry.file_name().to_str() {
            if paths::parse_emote_filename(name).is_some() {
                emote_count += 1;
            }
        }
        size_bytes += entry.metadata().map(|m| m.len()).unwrap_or(0);
    }

    CacheInfo {
        path: root.to_path_buf(),
        exists,
        collection_count,
        emote_count,
        size_bytes,
    }
}
