//! History caching layer.

mod history_cache;

pub use history_cache::{HistoryCache, HistoryCacheKey};
