/// Time-to-live for cached history series, in seconds
pub const HISTORY_CACHE_TTL_SECS: u64 = 300;

/// Maximum number of (symbol, timeframe) series kept in the history cache
pub const HISTORY_CACHE_MAX_CAPACITY: u64 = 256;

/// Symbol used by the provider connectivity probe
pub const CONNECTIVITY_PROBE_SYMBOL: &str = "^GSPC";
