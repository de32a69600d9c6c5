//! Cache path resolution
//!
//! Pure path arithmetic; no I/O happens in this module. The on-disk layout
//! is `<root>/<collection>/<name>-<id>.png`, and the `-<id>.png` suffix is
//! the contract the startup scan parses IDs back out of.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::core::sanitize::sanitize;
use crate::infra::dirs::EmotecacheDirs;

static ID_SUFFIX: OnceLock<Regex> = OnceLock::new();

/// Resolve the cache root from an optional override
///
/// A non-empty, non-whitespace override wins, with a leading `~` expanded
/// to the home directory. Anything else falls back to the default emotes
/// directory under the platform data dir.
pub fn resolve_root(override_dir: Option<&str>) -> PathBuf {
    match override_dir.map(str::trim) {
        Some(dir) if !dir.is_empty() => expand_home(dir),
        _ => EmotecacheDirs::new().emotes_dir(),
    }
}

/// Expand a leading `~` to the user's home directory
fn expand_home(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    PathBuf::from(path)
}

/// Directory holding one collection's emotes
pub fn collection_dir(root: &Path, collection: &str) -> PathBuf {
    root.join(sanitize(collection))
}

/// Full path for one emote
///
/// The ID is appended verbatim, never sanitized; altering it would break
/// the round-trip through [`parse_emote_filename`].
pub fn emote_path(root: &Path, collection: &str, name: &str, id: &str) -> PathBuf {
    collection_dir(root, collection).join(format!("{}-{id}.png", sanitize(name)))
}

/// Extract the emote ID from a cached filename
///
/// Returns the digits captured from the trailing `-<id>.png`, or `None` for
/// files this cache did not write.
pub fn parse_emote_filename(filename: &str) -> Option<&str> {
    let re = ID_SUFFIX.get_or_init(|| Regex::new(r"-(\d+)\.png$").expect("hardcoded regex"));
    re.captures(filename)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
