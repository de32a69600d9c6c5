//! Default configuration values

/// Overall timeout for fetching a single emote (in seconds)
pub const FETCH_TIMEOUT_SECS: u64 = 60;

/// Connection timeout for the HTTP client (in seconds)
pub const CONNECT_TIMEOUT_SECS: u64 = 15;

/// Path segment used when a name sanitizes down to nothing
pub const FALLBACK_SEGMENT: &str = "unknown";

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
