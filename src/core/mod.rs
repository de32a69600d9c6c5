//! Caching engine
//!
//! Business logic for the cache: name sanitization, path resolution, dedup
//! tracking, the startup scan, and batch coordination. Network and
//! filesystem primitives live in [`crate::infra`]; this module decides when
//! they run.
//!
//! # Submodules
//!
//! - [`sanitize`] - Display-name sanitization
//! - [`paths`] - Cache path resolution and filename parsing
//! - [`tracker`] - In-memory dedup tracking
//! - [`size`] - Emote size selection
//! - [`cache`] - The cache manager: scan, single, and batch operations
//! - [`info`] - On-disk cache statistics
//! - [`global_config`] - Global configuration management

pub mod cache;
pub mod global_config;
pub mod info;
pub mod paths;
pub mod sanitize;
pub mod size;
pub mod tracker;
