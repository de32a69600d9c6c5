//! Error types for emotecache
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Fetch errors
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network error
    #[error("Network error fetching '{url}': {error}")]
    Network { url: String, error: String },

    /// Unexpected HTTP status
    #[error("Unexpected status {status} fetching '{url}'")]
    Status { url: String, status: u16 },

    /// IO error while writing the response body
    #[error("IO error for '{path}': {error}")]
    Io { path: PathBuf, error: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to list directory
    #[error("Failed to list directory '{path}': {error}")]
    ListDir { path: PathBuf, error: String },
}

/// Errors a single cache operation can hit between the dedup check and the
/// finished file on disk
#[derive(Error, Debug)]
pub enum CacheError {
    /// Fetch error
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),
}
