//! Display-name sanitization
//!
//! Turns arbitrary emote and collection names into filesystem-safe path
//! segments.

use crate::config::defaults;

/// Characters replaced with underscores
const UNSAFE_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Sanitize a display name into a single safe path segment
///
/// Control characters and path punctuation become underscores, surrounding
/// whitespace and trailing periods are stripped, and an empty result falls
/// back to a fixed placeholder. Applying it twice yields the same output.
pub fn sanitize(raw: &str) -> String {
    let replaced: String = raw
        .chars()
        .map(|c| {
            if c.is_control() || UNSAFE_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect();

    // Trailing whitespace and periods are stripped together so a second
    // pass has nothing left to remove
    let trimmed = replaced
        .trim_start()
        .trim_end_matches(|c: char| c.is_whitespace() || c == '.');

    if trimmed.is_empty() {
        defaults::FALLBACK_SEGMENT.to_string()
    } else {
        trimmed.to_string()
    }
}
