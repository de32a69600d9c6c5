//! Remote asset source URLs

/// Emote CDN base URL
pub const EMOTE_CDN: &str = "https://cdn.discordapp.com/emojis";
