//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use tempfile::TempDir;

use emotecache::core::cache::EmoteRef;

/// Bytes standing in for a downloaded image
#[allow(dead_code)]
pub const PNG: &[u8] = b"\x89PNG\r\n\x1a\nfake image data";

/// Build an emote reference
#[allow(dead_code)]
pub fn emote(id: &str, name: &str, collection: &str) -> EmoteRef {
    EmoteRef {
        id: id.to_string(),
        name: name.to_string(),
        collection: collection.to_string(),
    }
}

/// Cache root in a temporary directory
///
/// Provides helpers for seeding files the way a previous run would have
/// left them.
pub struct TestRoot {
    /// Temporary directory holding the cache root
    pub dir: TempDir,
}

impl TestRoot {
    /// Create a new empty cache root
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the cache root path
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Seed a cached file under a collection directory
    #[allow(dead_code)]
    pub fn seed(&self, collection: &str, filename: &str) {
        let dir = self.dir.path().join(collection);
        std::fs::create_dir_all(&dir).expect("Failed to create collection dir");
        std::fs::write(dir.join(filename), PNG).expect("Failed to write file");
    }

    /// Check if a file exists relative to the root
    #[allow(dead_code)]
    pub fn file_exists(&self, relative: &str) -> bool {
        self.dir.path().join(relative).exists()
    }
}

impl Default for TestRoot {
    fn default() -> Self {
        Self::new()
    }
}
